//! DeFi Gateway Server
//!
//! Main entry point for the gateway server

use defi_gateway::GatewayBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	GatewayBuilder::new().start_server().await
}
