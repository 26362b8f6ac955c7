//! JSON-RPC fan-out client
//!
//! Sends one JSON-RPC request to a prioritized endpoint list and returns
//! the first well-formed, error-free response. Endpoints are tried strictly
//! in order; there is no retry of the same endpoint and no backoff, the
//! only recovery is advancing to the next provider.

use gateway_types::RpcError;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Fan-out client over a de-duplicated, priority-ordered endpoint list.
#[derive(Debug, Clone)]
pub struct RpcClient {
	client: reqwest::Client,
	endpoints: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
	result: Option<Value>,
	error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
	message: Option<String>,
}

impl RpcClient {
	/// Create a client over the given endpoints. Blank entries are dropped
	/// and duplicates collapse onto their first (highest-priority) slot.
	pub fn new(client: reqwest::Client, endpoints: Vec<String>) -> Self {
		let mut deduped: Vec<String> = Vec::with_capacity(endpoints.len());
		for endpoint in endpoints {
			let url = endpoint.trim().to_string();
			if !url.is_empty() && !deduped.contains(&url) {
				deduped.push(url);
			}
		}

		Self {
			client,
			endpoints: deduped,
		}
	}

	pub fn endpoints(&self) -> &[String] {
		&self.endpoints
	}

	/// Call `method` against each endpoint in priority order, returning the
	/// `result` of the first success. On total failure the error carries
	/// one reason per endpoint, in attempt order.
	pub async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
		if self.endpoints.is_empty() {
			return Err(RpcError::NoEndpoints);
		}

		let request = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params,
		});

		let mut failures = Vec::new();

		for url in &self.endpoints {
			let response = match self.client.post(url).json(&request).send().await {
				Ok(response) => response,
				Err(err) => {
					failures.push(format!("{url}: {err}"));
					continue;
				},
			};

			if !response.status().is_success() {
				failures.push(format!("{url}: HTTP {}", response.status().as_u16()));
				continue;
			}

			let envelope: RpcEnvelope = match response.json().await {
				Ok(envelope) => envelope,
				Err(err) => {
					failures.push(format!("{url}: {err}"));
					continue;
				},
			};

			if let Some(error) = envelope.error {
				failures.push(format!(
					"{url}: {}",
					error.message.unwrap_or_else(|| "RPC error".to_string())
				));
				continue;
			}

			match envelope.result {
				Some(result) => {
					debug!(method, endpoint = %url, "RPC call succeeded");
					return Ok(result);
				},
				None => failures.push(format!("{url}: missing result field")),
			}
		}

		warn!(method, attempts = failures.len(), "all RPC providers failed");
		Err(RpcError::AllEndpointsFailed {
			method: method.to_string(),
			failures,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockito::Server;

	fn client() -> reqwest::Client {
		reqwest::Client::new()
	}

	#[test]
	fn test_endpoints_are_deduped_in_order() {
		let rpc = RpcClient::new(
			client(),
			vec![
				"https://a.example".to_string(),
				" https://b.example ".to_string(),
				"https://a.example".to_string(),
				String::new(),
			],
		);
		assert_eq!(rpc.endpoints(), ["https://a.example", "https://b.example"]);
	}

	#[tokio::test]
	async fn test_empty_endpoint_list_fails_fast() {
		let rpc = RpcClient::new(client(), Vec::new());
		let err = rpc.call("eth_blockNumber", json!([])).await.unwrap_err();
		assert!(matches!(err, RpcError::NoEndpoints));
	}

	#[tokio::test]
	async fn test_first_success_short_circuits() {
		let mut server = Server::new_async().await;
		let mock = server
			.mock("POST", "/")
			.expect(1)
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x10"}"#)
			.create_async()
			.await;

		let rpc = RpcClient::new(client(), vec![server.url(), "http://127.0.0.1:1".to_string()]);
		let result = rpc.call("eth_blockNumber", json!([])).await.unwrap();

		mock.assert_async().await;
		assert_eq!(result, json!("0x10"));
	}

	#[tokio::test]
	async fn test_failover_reaches_later_endpoint() {
		let mut bad_http = Server::new_async().await;
		bad_http
			.mock("POST", "/")
			.with_status(500)
			.create_async()
			.await;

		let mut bad_rpc = Server::new_async().await;
		bad_rpc
			.mock("POST", "/")
			.with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"message":"rate limited"}}"#)
			.create_async()
			.await;

		let mut good = Server::new_async().await;
		good.mock("POST", "/")
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x2a"}"#)
			.create_async()
			.await;

		let rpc = RpcClient::new(client(), vec![bad_http.url(), bad_rpc.url(), good.url()]);
		let result = rpc.call("eth_blockNumber", json!([])).await.unwrap();
		assert_eq!(result, json!("0x2a"));
	}

	#[tokio::test]
	async fn test_total_failure_lists_reasons_in_order() {
		let mut bad_http = Server::new_async().await;
		bad_http
			.mock("POST", "/")
			.with_status(503)
			.create_async()
			.await;

		let mut bad_rpc = Server::new_async().await;
		bad_rpc
			.mock("POST", "/")
			.with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"message":"no luck"}}"#)
			.create_async()
			.await;

		let first = bad_http.url();
		let second = bad_rpc.url();
		let rpc = RpcClient::new(client(), vec![first.clone(), second.clone()]);
		let err = rpc.call("eth_getBalance", json!([])).await.unwrap_err();

		match err {
			RpcError::AllEndpointsFailed { method, failures } => {
				assert_eq!(method, "eth_getBalance");
				assert_eq!(failures.len(), 2);
				assert_eq!(failures[0], format!("{first}: HTTP 503"));
				assert_eq!(failures[1], format!("{second}: no luck"));
			},
			other => panic!("unexpected error: {other}"),
		}
	}
}
