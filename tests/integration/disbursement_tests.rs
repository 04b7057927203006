use crate::common::{
    self, ACCOUNT_NUMBER, AMOUNT, AVAILABLE_BALANCE, BANK_CODE, BATCH_REFERENCE, CUSTOMER_NAME,
    LEDGER_BALANCE, TRANSFER_REFERENCE, VALID_OTP, WALLET_ID, bulk_transfer_json, envelope,
    error_envelope, mock_login, query, single_transfer_json, test_basic_auth,
    transfer_details_json,
};
use mockito::{Matcher, Server};
use monnify_client::prelude::*;
use serde_json::json;

fn transfer() -> SingleTransferRequest {
    SingleTransferRequest::new(AMOUNT, TRANSFER_REFERENCE, "Payout", BANK_CODE, ACCOUNT_NUMBER)
}

#[tokio::test]
async fn test_single_transfer_uses_basic_auth() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 3599, 0).await;
    let single = server
        .mock("POST", "/v1/disbursements/single")
        .match_header("authorization", test_basic_auth().as_str())
        .match_body(Matcher::Json(json!({
            "amount": AMOUNT,
            "reference": TRANSFER_REFERENCE,
            "narration": "Payout",
            "bankCode": BANK_CODE,
            "accountNumber": ACCOUNT_NUMBER,
            "currency": "NGN",
            "walletId": WALLET_ID
        })))
        .with_status(200)
        .with_body(envelope(single_transfer_json("SUCCESS")))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let response = client
        .disbursements()
        .single_transfer(&transfer().with_wallet_id(WALLET_ID))
        .await
        .unwrap();

    assert_eq!(response.response_body.amount, AMOUNT);
    assert_eq!(response.response_body.reference, TRANSFER_REFERENCE);
    assert_eq!(response.response_body.status, "SUCCESS");

    login.assert_async().await;
    single.assert_async().await;
}

#[tokio::test]
async fn test_bulk_transfer() {
    let mut server = Server::new_async().await;
    let batch = server
        .mock("POST", "/v1/disbursements/batch")
        .match_header("authorization", test_basic_auth().as_str())
        .match_body(Matcher::PartialJson(json!({
            "batchReference": BATCH_REFERENCE,
            "walletId": WALLET_ID,
            "onValidationFailure": "CONTINUE",
            "notificationInterval": 10
        })))
        .with_status(200)
        .with_body(envelope(bulk_transfer_json("PENDING_AUTHORIZATION")))
        .expect(1)
        .create_async()
        .await;

    let request = BulkTransferRequest::new("Payouts", BATCH_REFERENCE, "Payouts", WALLET_ID)
        .with_transfer(transfer());

    let client = common::test_client(&server);
    let response = client.disbursements().bulk_transfer(&request).await.unwrap();
    assert_eq!(response.response_body.batch_reference, BATCH_REFERENCE);
    assert_eq!(response.response_body.total_transactions, 1);
    assert_eq!(response.response_body.batch_status, "PENDING_AUTHORIZATION");
    batch.assert_async().await;
}

#[tokio::test]
async fn test_authorize_transfers() {
    let mut server = Server::new_async().await;
    let single = server
        .mock("POST", "/v1/disbursements/single/validate-otp")
        .match_body(Matcher::Json(json!({
            "reference": TRANSFER_REFERENCE,
            "authorizationCode": VALID_OTP
        })))
        .with_status(200)
        .with_body(envelope(single_transfer_json("SUCCESS")))
        .expect(1)
        .create_async()
        .await;
    let batch = server
        .mock("POST", "/v1/disbursements/batch/validate-otp")
        .match_body(Matcher::Json(json!({
            "reference": BATCH_REFERENCE,
            "authorizationCode": VALID_OTP
        })))
        .with_status(200)
        .with_body(envelope(bulk_transfer_json("COMPLETED")))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let disbursements = client.disbursements();
    let single_response = disbursements
        .authorize_single_transfer(TRANSFER_REFERENCE, VALID_OTP)
        .await
        .unwrap();
    let batch_response = disbursements
        .authorize_bulk_transfer(BATCH_REFERENCE, VALID_OTP)
        .await
        .unwrap();

    assert_eq!(single_response.response_body.status, "SUCCESS");
    assert_eq!(batch_response.response_body.batch_status, "COMPLETED");
    single.assert_async().await;
    batch.assert_async().await;
}

#[tokio::test]
async fn test_invalid_otp_is_request_failed() {
    let mut server = Server::new_async().await;
    let single = server
        .mock("POST", "/v1/disbursements/single/validate-otp")
        .with_status(400)
        .with_body(error_envelope("D03", "Invalid authorization code"))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let err = client
        .disbursements()
        .authorize_single_transfer(TRANSFER_REFERENCE, "000000")
        .await
        .unwrap_err();

    match err {
        AppError::RequestFailed { status, code, message } => {
            assert_eq!(status, 400);
            assert_eq!(code, "D03");
            assert_eq!(message, "Invalid authorization code");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    single.assert_async().await;
}

#[tokio::test]
async fn test_transfer_details() {
    let mut server = Server::new_async().await;
    let single = server
        .mock("GET", "/v1/disbursements/single/summary")
        .match_query(query(&[("reference", TRANSFER_REFERENCE)]))
        .with_status(200)
        .with_body(envelope(transfer_details_json()))
        .expect(1)
        .create_async()
        .await;
    let batch = server
        .mock("GET", "/v1/disbursements/batch/summary")
        .match_query(query(&[("reference", BATCH_REFERENCE)]))
        .with_status(200)
        .with_body(envelope(json!({
            "title": "Payouts",
            "totalAmount": AMOUNT,
            "totalFee": 10.75,
            "batchReference": BATCH_REFERENCE,
            "totalTransactions": 1,
            "failedCount": 0,
            "successfulCount": 1,
            "pendingCount": 0,
            "batchStatus": "COMPLETED",
            "dateCreated": "2020-02-26T09:38:13.000+0000"
        })))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let disbursements = client.disbursements();
    let details = disbursements
        .single_transfer_details(TRANSFER_REFERENCE)
        .await
        .unwrap()
        .into_body();
    assert_eq!(details.account_name, CUSTOMER_NAME);
    assert_eq!(details.status, "SUCCESS");

    let summary = disbursements
        .bulk_transfer_details(BATCH_REFERENCE)
        .await
        .unwrap()
        .into_body();
    assert_eq!(summary.successful_count, 1);
    assert_eq!(summary.batch_status, "COMPLETED");

    single.assert_async().await;
    batch.assert_async().await;
}

#[tokio::test]
async fn test_transfer_listings() {
    let page = json!({
        "content": [transfer_details_json()],
        "totalElements": 1,
        "totalPages": 1,
        "last": true,
        "first": true,
        "numberOfElements": 1,
        "size": 5,
        "number": 0,
        "empty": false
    });

    let mut server = Server::new_async().await;
    let bulk = server
        .mock("GET", "/v1/disbursements/bulk/TEST_BCH_REF/transactions")
        .match_query(query(&[("pageNo", "0"), ("pageSize", "5")]))
        .with_status(200)
        .with_body(envelope(page.clone()))
        .expect(1)
        .create_async()
        .await;
    let single = server
        .mock("GET", "/v1/disbursements/single/transactions")
        .match_query(query(&[("pageNo", "1"), ("pageSize", "5")]))
        .with_status(200)
        .with_body(envelope(page))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let disbursements = client.disbursements();
    let bulk_page = disbursements
        .bulk_transfer_transactions(BATCH_REFERENCE, 0, 5)
        .await
        .unwrap()
        .into_body();
    let single_page = disbursements
        .single_transfer_transactions(1, 5)
        .await
        .unwrap()
        .into_body();

    assert_eq!(bulk_page.content.len(), 1);
    assert_eq!(single_page.content[0].reference, TRANSFER_REFERENCE);
    bulk.assert_async().await;
    single.assert_async().await;
}

#[tokio::test]
async fn test_validate_account_number() {
    let mut server = Server::new_async().await;
    let validate = server
        .mock("GET", "/v1/disbursements/account/validate")
        .match_query(query(&[("accountNumber", ACCOUNT_NUMBER), ("bankCode", BANK_CODE)]))
        .with_status(200)
        .with_body(envelope(json!({
            "accountNumber": ACCOUNT_NUMBER,
            "accountName": CUSTOMER_NAME,
            "bankCode": BANK_CODE
        })))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let response = client
        .disbursements()
        .validate_account_number(ACCOUNT_NUMBER, BANK_CODE)
        .await
        .unwrap();
    assert_eq!(response.response_body.account_name, CUSTOMER_NAME);
    validate.assert_async().await;
}

#[tokio::test]
async fn test_wallet_balance() {
    let mut server = Server::new_async().await;
    let balance = server
        .mock("GET", "/v1/disbursements/wallet-balance")
        .match_header("authorization", test_basic_auth().as_str())
        .match_query(query(&[("walletId", WALLET_ID)]))
        .with_status(200)
        .with_body(envelope(json!({
            "availableBalance": AVAILABLE_BALANCE,
            "ledgerBalance": LEDGER_BALANCE
        })))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let response = client.disbursements().wallet_balance(WALLET_ID).await.unwrap();
    assert_eq!(response.response_body.available_balance, AVAILABLE_BALANCE);
    assert_eq!(response.response_body.ledger_balance, LEDGER_BALANCE);
    balance.assert_async().await;
}

#[tokio::test]
async fn test_resend_otp() {
    let mut server = Server::new_async().await;
    let resend = server
        .mock("POST", "/v1/disbursements/single/resend-otp")
        .match_body(Matcher::Json(json!({"reference": TRANSFER_REFERENCE})))
        .with_status(200)
        .with_body(envelope(json!({
            "message": "Authorization code will be processed and sent to predefined email addresses(s)"
        })))
        .expect(1)
        .create_async()
        .await;

    let client = common::test_client(&server);
    let response = client.disbursements().resend_otp(TRANSFER_REFERENCE).await.unwrap();
    assert!(response.response_body.message.starts_with("Authorization code"));
    resend.assert_async().await;
}

#[tokio::test]
async fn test_missing_query_arguments_are_rejected() {
    let server = Server::new_async().await;
    let client = common::test_client(&server);
    let disbursements = client.disbursements();

    assert!(matches!(
        disbursements.wallet_balance("").await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        disbursements.validate_account_number(ACCOUNT_NUMBER, "").await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        disbursements.single_transfer_details("").await,
        Err(AppError::InvalidInput(_))
    ));
}
