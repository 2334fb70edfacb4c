use chainscope_core::{registry, InspectorConfig, Token};

fn main() {
    let config = match InspectorConfig::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("Chainscope Network Configuration:\n");
    println!("  Default Chain: {}", config.default_chain);
    println!("  Request Timeout: {}s", config.request_timeout_secs);
    println!("  Log Level: {}", config.log_level);
    println!();

    for spec in registry::all() {
        let endpoint = config.endpoint_for(spec.chain);
        let source = if config.rpc_overrides.contains_key(&spec.chain) { " (override)" } else { "" };

        println!("  {} - {} (chain id {})", spec.chain, spec.name, spec.chain_id);
        println!("    RPC URL: {}{}", endpoint, source);
        println!("    Explorer: {}", spec.chain.block_explorer());
        println!("    Native: {} ({} decimals)", spec.native_currency, spec.native_decimals);
        for token in Token::ALL {
            let address = token.address_on(spec.chain).unwrap_or("(not deployed)");
            println!("    {} ({}): {}", token, token.name(), address);
        }
    }
}
