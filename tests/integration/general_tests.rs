use crate::common::{
    self, PAYMENT_REFERENCE, TRANSFER_REFERENCE, banks_json, envelope, error_envelope,
    general_transaction_json, mock_json, mock_login, paid_notification, signed_hash,
};
use mockito::Server;
use monnify_client::prelude::*;

#[tokio::test]
async fn test_get_transaction() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 3599, 1).await;
    let transaction = mock_json(
        &mut server,
        "GET",
        "/v2/transactions/TEST_TRF_REF",
        200,
        envelope(general_transaction_json(PAYMENT_STATUS_PAID)),
        1,
    )
    .await;

    let client = common::test_client(&server);
    let response = client.general().get_transaction(TRANSFER_REFERENCE).await.unwrap();
    let tx = response.response_body;
    assert_eq!(tx.payment_reference, PAYMENT_REFERENCE);
    assert_eq!(tx.payment_status, PAYMENT_STATUS_PAID);
    assert_eq!(tx.transaction_hash, signed_hash());

    login.assert_async().await;
    transaction.assert_async().await;
}

#[tokio::test]
async fn test_get_banks() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let banks = mock_json(&mut server, "GET", "/v1/banks", 200, envelope(banks_json()), 1).await;

    let client = common::test_client(&server);
    let list = client.general().get_banks().await.unwrap().into_body();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Access bank");
    assert_eq!(list[0].ussd_template.as_deref(), Some("*901*Amount*AccountNumber#"));
    assert!(list[1].transfer_ussd_template.is_none());
    banks.assert_async().await;
}

#[tokio::test]
async fn test_bank_cache_and_invalidation() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let banks = mock_json(&mut server, "GET", "/v1/banks", 200, envelope(banks_json()), 2).await;

    let client = common::test_client(&server);
    let general = client.general();

    let first = general.get_banks_cached().await.unwrap();
    let second = client.general().get_banks_cached().await.unwrap();
    assert_eq!(first, second);

    general.invalidate_bank_cache().await;
    let third = general.get_banks_cached().await.unwrap();
    assert_eq!(third.len(), 2);

    banks.assert_async().await;
}

#[tokio::test]
async fn test_failed_bank_fetch_is_not_cached() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let failing = mock_json(
        &mut server,
        "GET",
        "/v1/banks",
        500,
        error_envelope("99", "internal error"),
        1,
    )
    .await;

    let client = common::test_client(&server);
    let general = client.general();
    assert!(general.get_banks_cached().await.is_err());
    failing.assert_async().await;

    failing.remove_async().await;
    let banks = mock_json(&mut server, "GET", "/v1/banks", 200, envelope(banks_json()), 1).await;
    assert_eq!(general.get_banks_cached().await.unwrap().len(), 2);
    banks.assert_async().await;
}

#[tokio::test]
async fn test_verify_transaction_hash_only() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, 3599, 0).await;

    let client = common::test_client(&server);
    let general = client.general();

    let payload = paid_notification();
    assert!(general.verify_transaction(&payload, false).await);

    let mut tampered = payload.clone();
    tampered.amount_paid = "1000".to_string();
    assert!(!general.verify_transaction(&tampered, false).await);

    login.assert_async().await;
}

#[tokio::test]
async fn test_verify_transaction_two_step() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let paid = mock_json(
        &mut server,
        "GET",
        "/v2/transactions/TEST_TRF_REF",
        200,
        envelope(general_transaction_json(PAYMENT_STATUS_PAID)),
        1,
    )
    .await;

    let client = common::test_client(&server);
    assert!(client.general().verify_transaction(&paid_notification(), true).await);
    paid.assert_async().await;
}

#[tokio::test]
async fn test_verify_transaction_two_step_rejects_unpaid() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let pending = mock_json(
        &mut server,
        "GET",
        "/v2/transactions/TEST_TRF_REF",
        200,
        envelope(general_transaction_json(PAYMENT_STATUS_PENDING)),
        1,
    )
    .await;

    let client = common::test_client(&server);
    assert!(!client.general().verify_transaction(&paid_notification(), true).await);
    pending.assert_async().await;
}

#[tokio::test]
async fn test_verify_transaction_two_step_lookup_failure() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, 3599, 1).await;
    let missing = mock_json(
        &mut server,
        "GET",
        "/v2/transactions/TEST_TRF_REF",
        404,
        error_envelope("99", "transaction not found"),
        1,
    )
    .await;

    let client = common::test_client(&server);
    assert!(!client.general().verify_transaction(&paid_notification(), true).await);
    missing.assert_async().await;
}
