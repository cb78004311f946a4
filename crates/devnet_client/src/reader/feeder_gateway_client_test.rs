use assert_matches::assert_matches;
use mockito::mock;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;
use starknet_api::core::{ClassHash, ContractAddress, Nonce, PatriciaKey};
use starknet_api::hash::{StarkFelt, StarkHash};
use starknet_api::transaction::TransactionHash;
use starknet_api::{patricia_key, stark_felt};

use crate::reader::{
    FeederGatewayClient, FeederGatewayReader, GET_CLASS_BY_HASH_URL,
    GET_COMPILED_CLASS_BY_HASH_URL, GET_NONCE_URL, GET_TRANSACTION_RECEIPT_URL,
    GET_TRANSACTION_URL,
};
use crate::ClientError;

#[test]
fn new_urls() {
    let url_base_str = "https://url";
    let client = FeederGatewayClient::new(url_base_str).unwrap();
    assert_eq!(client.urls.get_nonce.as_str(), url_base_str.to_string() + "/" + GET_NONCE_URL);
    assert_eq!(
        client.urls.get_class_by_hash.as_str(),
        url_base_str.to_string() + "/" + GET_CLASS_BY_HASH_URL
    );
    assert_eq!(
        client.urls.get_compiled_class_by_hash.as_str(),
        url_base_str.to_string() + "/" + GET_COMPILED_CLASS_BY_HASH_URL
    );
    assert_eq!(
        client.urls.get_transaction.as_str(),
        url_base_str.to_string() + "/" + GET_TRANSACTION_URL
    );
    assert_eq!(
        client.urls.get_transaction_receipt.as_str(),
        url_base_str.to_string() + "/" + GET_TRANSACTION_RECEIPT_URL
    );
}

#[tokio::test]
async fn get_nonce() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let mock_nonce = mock("GET", "/feeder_gateway/get_nonce?contractAddress=0x21")
        .with_status(200)
        .with_body(r#""0x5""#)
        .create();
    let nonce = client.nonce(ContractAddress(patricia_key!("0x21"))).await.unwrap();
    mock_nonce.assert();
    assert_eq!(nonce, Nonce(StarkFelt::from(5_u8)));
}

#[tokio::test]
async fn get_nonce_fails_on_malformed_hex() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let mock_nonce = mock("GET", "/feeder_gateway/get_nonce?contractAddress=0x22")
        .with_status(200)
        .with_body(r#""not hex""#)
        .create();
    let result = client.nonce(ContractAddress(patricia_key!("0x22"))).await;
    mock_nonce.assert();
    assert_matches!(result, Err(ClientError::SerdeError(_)));
}

#[tokio::test]
async fn get_nonce_surfaces_gateway_error() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let body = r#"{"code": "StarknetErrorCode.UNINITIALIZED_CONTRACT", "message": "Contract not deployed."}"#;
    let mock_nonce = mock("GET", "/feeder_gateway/get_nonce?contractAddress=0x23")
        .with_status(500)
        .with_body(body)
        .create();
    let result = client.nonce(ContractAddress(patricia_key!("0x23"))).await;
    mock_nonce.assert();
    assert_matches!(
        result,
        Err(ClientError::GatewayError(err))
        if err.code == "StarknetErrorCode.UNINITIALIZED_CONTRACT"
    );
}

#[tokio::test]
async fn get_class_by_hash() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let class_json = json!({
        "contract_class_version": "0.1.0",
        "sierra_program": ["0x1", "0x2"],
    });
    let mock_class = mock("GET", "/feeder_gateway/get_class_by_hash?classHash=0x31")
        .with_status(200)
        .with_body(class_json.to_string())
        .create();
    let class = client.class_by_hash(ClassHash(stark_felt!("0x31"))).await.unwrap();
    mock_class.assert();
    assert_eq!(class, class_json);
}

#[tokio::test]
async fn get_compiled_class_by_hash() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let compiled_json = json!({"compiler_version": "2.1.0", "bytecode": ["0x1"]});
    let mock_compiled =
        mock("GET", "/feeder_gateway/get_compiled_class_by_hash?classHash=0x32")
            .with_status(200)
            .with_body(compiled_json.to_string())
            .create();
    let compiled = client.compiled_class_by_hash(ClassHash(stark_felt!("0x32"))).await.unwrap();
    mock_compiled.assert();
    assert_eq!(compiled, compiled_json);
}

#[tokio::test]
async fn get_transaction_and_receipt() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let transaction_json = json!({"status": "ACCEPTED_ON_L2", "transaction_hash": "0x33"});
    let mock_transaction = mock("GET", "/feeder_gateway/get_transaction?transactionHash=0x33")
        .with_status(200)
        .with_body(transaction_json.to_string())
        .create();
    let receipt_json = json!({"transaction_hash": "0x33", "execution_resources": {}});
    let mock_receipt =
        mock("GET", "/feeder_gateway/get_transaction_receipt?transactionHash=0x33")
            .with_status(200)
            .with_body(receipt_json.to_string())
            .create();

    let transaction = client.transaction(TransactionHash(stark_felt!("0x33"))).await.unwrap();
    let receipt = client.transaction_receipt(TransactionHash(stark_felt!("0x33"))).await.unwrap();
    mock_transaction.assert();
    mock_receipt.assert();
    assert_eq!(transaction, transaction_json);
    assert_eq!(receipt, receipt_json);
}

#[tokio::test]
async fn get_class_by_hash_surfaces_bad_status() {
    let client = FeederGatewayClient::new(&mockito::server_url()).unwrap();
    let mock_class = mock("GET", "/feeder_gateway/get_class_by_hash?classHash=0x34")
        .with_status(400)
        .with_body("malformed request")
        .create();
    let result = client.class_by_hash(ClassHash(stark_felt!("0x34"))).await;
    mock_class.assert();
    assert_matches!(
        result,
        Err(ClientError::BadResponseStatus { code, message })
        if code == StatusCode::BAD_REQUEST && message == "malformed request"
    );
}
