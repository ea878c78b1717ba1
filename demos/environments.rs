use superfaktura::core::*;

fn main() {
    println!("=== SuperFaktura deployments ===\n");
    for env in Environment::ALL {
        let kind = if env.is_sandbox() { "sandbox" } else { "production" };
        println!("  {:<12} {:<16} {:<32} {kind}", env.code(), env.to_string(), env.base_url());
    }

    println!("\n=== Selector parsing ===\n");
    for selector in ["SK", "czech-republic", "sandbox-cz", "de"] {
        match selector.parse::<Environment>() {
            Ok(env) => println!("  {selector:<16} => {}", env.base_url()),
            Err(e) => println!("  {selector:<16} => {e}"),
        }
    }

    println!("\n=== Configuration from the process environment ===\n");
    match Config::from_env() {
        Ok(config) => {
            println!("  {config:?}");
            match config.environment() {
                Some(env) => println!("  target: {env}"),
                None => println!("  target: custom URL"),
            }
        }
        Err(e) => println!("  {e}"),
    }
}
