use assert_matches::assert_matches;
use mockito::{mock, Matcher};
use pretty_assertions::assert_eq;
use starknet_api::core::Nonce;
use starknet_api::hash::StarkFelt;
use starknet_api::stark_felt;

use crate::test_utils::read_resource_file;
use crate::writer::objects::response::DeclareResponse;
use crate::writer::objects::transaction::DeclareV2Transaction;
use crate::writer::{GatewayClient, GatewayWriter};
use crate::ClientError;

#[tokio::test]
async fn add_declare_transaction() {
    let client = GatewayClient::new(&mockito::server_url()).unwrap();
    let tx_json_value: serde_json::Value =
        serde_json::from_str(&read_resource_file("writer/declare_v2.json")).unwrap();
    let tx = serde_json::from_value::<DeclareV2Transaction>(tx_json_value.clone()).unwrap();
    let response_body = read_resource_file("writer/declare_response.json");
    let mock_add_transaction = mock("POST", "/gateway/add_transaction")
        .match_body(Matcher::Json(tx_json_value))
        .with_status(200)
        .with_body(&response_body)
        .create();
    let expected_response = serde_json::from_str::<DeclareResponse>(&response_body).unwrap();
    assert_eq!(expected_response, client.add_declare_transaction(&tx).await.unwrap());
    mock_add_transaction.assert();
}

#[tokio::test]
async fn add_declare_transaction_surfaces_gateway_error() {
    let client = GatewayClient::new(&mockito::server_url()).unwrap();
    let tx =
        DeclareV2Transaction { nonce: Nonce(stark_felt!("0x9")), ..Default::default() };
    let error_body =
        r#"{"code": "StarknetErrorCode.CLASS_ALREADY_DECLARED", "message": "Class already declared."}"#;
    let mock_add_transaction = mock("POST", "/gateway/add_transaction")
        .match_body(Matcher::Json(serde_json::to_value(&tx).unwrap()))
        .with_status(500)
        .with_body(error_body)
        .create();
    let result = client.add_declare_transaction(&tx).await;
    mock_add_transaction.assert();
    assert_matches!(
        result,
        Err(ClientError::GatewayError(err))
        if err.code == "StarknetErrorCode.CLASS_ALREADY_DECLARED"
    );
}
