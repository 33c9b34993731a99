//! The Monobank API client.
//!
//! One async method per remote operation. Each call is a stateless
//! request/response exchange; the only state kept between calls is the
//! timestamp of the last admitted statement request, used for the
//! client-side rate-limit check.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use monobank_types::{
    CurrencyInfo, ErrorResponse, Invoice, InvoiceInfo, InvoiceStatus, StatementItem, UserInfo,
    Webhook,
};

use crate::error::{MonobankError, Result};
use crate::transport::{Method, ReqwestTransport, Request, Response, Transport};

/// Production API host.
const PRODUCTION_BASE_URL: &str = "https://api.monobank.ua";

/// Header carrying the personal or merchant token.
const TOKEN_HEADER: &str = "X-Token";

/// Longest statement window the API accepts: 31 days and 1 hour, in seconds.
const MAX_STATEMENT_PERIOD_SECS: i64 = 2_682_000;

/// Minimum interval between statement calls on one client instance.
const STATEMENT_CALL_INTERVAL: Duration = Duration::from_secs(60);

const BANK_CURRENCY: &str = "/bank/currency";
const PERSONAL_CLIENT_INFO: &str = "/personal/client-info";
const PERSONAL_WEBHOOK: &str = "/personal/webhook";
const MERCHANT_INVOICE_CREATE: &str = "/api/merchant/invoice/create";
const MERCHANT_INVOICE_STATUS: &str = "/api/merchant/invoice/status";

/// Client for the Monobank open API.
///
/// Holds the authentication token, the base URL and a transport handle;
/// exposes one method per remote operation. Configuration is immutable
/// per-instance, so clients with different tokens coexist in one process.
pub struct Monobank {
    base_url: String,
    token: String,
    transport: Arc<dyn Transport>,
    /// Instant the last statement call was admitted. Claimed under the lock
    /// during the pre-flight check so two concurrent calls cannot both pass.
    last_statement_call: Mutex<Option<Instant>>,
}

impl Monobank {
    /// Create a client for the production API.
    ///
    /// Fails with [`MonobankError::InvalidCredential`] when `token` is
    /// empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_transport(token, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client over an injected transport.
    pub fn with_transport(token: impl Into<String>, transport: Arc<dyn Transport>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(MonobankError::InvalidCredential);
        }

        Ok(Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
            token,
            transport,
            last_statement_call: Mutex::new(None),
        })
    }

    /// Point the client at a different host, e.g. a sandbox.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL the client dispatches to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the bank's exchange rates.
    ///
    /// The endpoint requires no authentication; the token header is sent
    /// and ignored. The server refreshes rates at most once every five
    /// minutes.
    pub async fn get_currency_rates(&self) -> Result<Vec<CurrencyInfo>> {
        let response = self.get(BANK_CURRENCY).await?;
        match response.status {
            200 => parse_json(&response.body),
            _ => Err(unexpected(response)),
        }
    }

    /// Get the client's personal information, accounts and jars.
    ///
    /// The API allows this call once every 60 seconds; respecting that
    /// interval is the caller's responsibility here, unlike
    /// [`get_statement`](Self::get_statement) which checks it client-side.
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        let response = self.get(PERSONAL_CLIENT_INFO).await?;
        match response.status {
            200 => parse_json(&response.body),
            403 => Err(MonobankError::InvalidToken),
            _ => Err(unexpected(response)),
        }
    }

    /// Register the URL the bank notifies about new transactions.
    ///
    /// Fails with [`MonobankError::InvalidArgument`] before dispatch when
    /// `new_hook_url` is empty.
    pub async fn set_webhook(&self, new_hook_url: &str) -> Result<()> {
        if new_hook_url.is_empty() {
            return Err(MonobankError::InvalidArgument {
                name: "newHookUrl",
            });
        }

        let response = self
            .post(PERSONAL_WEBHOOK, &Webhook::new(new_hook_url))
            .await?;
        match response.status {
            200 => Ok(()),
            _ => Err(unexpected(response)),
        }
    }

    /// Get the statement of `account` between `from` and `to`, ordered by
    /// transaction time descending as the API returns it.
    ///
    /// Pre-flight checks, all made before any network call:
    /// - empty `account` fails with [`MonobankError::InvalidArgument`];
    /// - a window longer than 31 days and 1 hour fails with
    ///   [`MonobankError::InvalidPeriod`];
    /// - a call sooner than 60 seconds after the previous one on this
    ///   instance fails with [`MonobankError::RateLimited`] — the remote
    ///   would reject it anyway.
    ///
    /// Specify account `"0"` for the default account.
    pub async fn get_statement(
        &self,
        account: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatementItem>> {
        if account.is_empty() {
            return Err(MonobankError::InvalidArgument { name: "account" });
        }

        let requested = to.timestamp() - from.timestamp();
        if requested > MAX_STATEMENT_PERIOD_SECS {
            return Err(MonobankError::InvalidPeriod { requested });
        }

        self.claim_statement_slot()?;

        let path = format!(
            "/personal/statement/{}/{}/{}",
            account,
            from.timestamp(),
            to.timestamp()
        );
        let response = self.get(&path).await?;
        match response.status {
            200 => parse_json(&response.body),
            403 => Err(MonobankError::InvalidToken),
            _ => Err(unexpected(response)),
        }
    }

    /// Create a merchant invoice and get back its id and payment page URL.
    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<InvoiceInfo> {
        let response = self.post(MERCHANT_INVOICE_CREATE, invoice).await?;
        match response.status {
            200 => parse_json(&response.body),
            403 => Err(MonobankError::InvalidToken),
            400 | 404 => Err(invalid_request(response)),
            _ => Err(unexpected(response)),
        }
    }

    /// Get the current status of a merchant invoice.
    ///
    /// Fails with [`MonobankError::InvalidArgument`] before dispatch when
    /// `invoice_id` is empty.
    pub async fn get_invoice_status(&self, invoice_id: &str) -> Result<InvoiceStatus> {
        if invoice_id.is_empty() {
            return Err(MonobankError::InvalidArgument { name: "invoiceId" });
        }

        let path = format!("{}?invoiceId={}", MERCHANT_INVOICE_STATUS, invoice_id);
        let response = self.get(&path).await?;
        match response.status {
            200 => parse_json(&response.body),
            403 => Err(MonobankError::InvalidToken),
            400 | 404 => Err(invalid_request(response)),
            _ => Err(unexpected(response)),
        }
    }

    /// Admit a statement call, or reject it when the previous one was less
    /// than 60 seconds ago. The slot is claimed inside the lock, so of two
    /// concurrent calls exactly one is admitted.
    fn claim_statement_slot(&self) -> Result<()> {
        let mut last = self
            .last_statement_call
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(admitted_at) = *last {
            let elapsed = admitted_at.elapsed();
            if elapsed < STATEMENT_CALL_INTERVAL {
                let retry_in = (STATEMENT_CALL_INTERVAL - elapsed).as_secs().max(1);
                return Err(MonobankError::RateLimited { retry_in });
            }
        }

        *last = Some(Instant::now());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Response> {
        self.dispatch(Request {
            method: Method::Get,
            url: format!("{}{}", self.base_url, path),
            headers: vec![(TOKEN_HEADER, self.token.clone())],
            body: None,
        })
        .await
    }

    async fn post<T: Serialize>(&self, path: &str, payload: &T) -> Result<Response> {
        let body = serde_json::to_string(payload)?;
        self.dispatch(Request {
            method: Method::Post,
            url: format!("{}{}", self.base_url, path),
            headers: vec![(TOKEN_HEADER, self.token.clone())],
            body: Some(body),
        })
        .await
    }

    async fn dispatch(&self, request: Request) -> Result<Response> {
        debug!(method = ?request.method, url = %request.url, "dispatching API request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|source| MonobankError::TransportFailure { source })?;

        if response.status != 200 {
            warn!(status = response.status, "API returned a non-success status");
        }

        Ok(response)
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

fn unexpected(response: Response) -> MonobankError {
    MonobankError::UnexpectedResponse {
        status: response.status,
        body: response.body,
    }
}

fn invalid_request(response: Response) -> MonobankError {
    let detail: Option<ErrorResponse> = serde_json::from_str(&response.body).ok();
    let err_code = detail.as_ref().and_then(|d| d.err_code.clone());
    let message = detail
        .and_then(|d| d.err_text)
        .unwrap_or(response.body);

    MonobankError::InvalidRequest {
        status: response.status,
        err_code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use monobank_types::PaymentType;

    /// Transport double: replays one canned reply and records every request
    /// it was handed.
    struct MockTransport {
        reply: std::result::Result<(u16, String), String>,
        requests: Mutex<Vec<Request>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok((status, body.to_string())),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn refusing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> Request {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(
            &self,
            request: Request,
        ) -> std::result::Result<Response, crate::error::BoxError> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok((status, body)) => Ok(Response {
                    status: *status,
                    body: body.clone(),
                }),
                Err(message) => Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    message.clone(),
                )
                .into()),
            }
        }
    }

    fn client(transport: Arc<MockTransport>) -> Monobank {
        Monobank::with_transport("test-token", transport).unwrap()
    }

    fn utc(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(matches!(
            Monobank::new(""),
            Err(MonobankError::InvalidCredential)
        ));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(transport).with_base_url("https://sandbox.example/");
        assert_eq!(client.base_url(), "https://sandbox.example");
    }

    #[tokio::test]
    async fn test_get_currency_rates_parses_array() {
        let transport = MockTransport::replying(
            200,
            r#"[{"currencyCodeA":840,"currencyCodeB":980,"date":1700000000,"rateSell":37.5,"rateBuy":37.0,"rateCross":0}]"#,
        );
        let client = client(Arc::clone(&transport));

        let rates = client.get_currency_rates().await.unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].currency_code_a, 840);

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://api.monobank.ua/bank/currency");
        assert!(request
            .headers
            .iter()
            .any(|(name, value)| *name == "X-Token" && value == "test-token"));
    }

    #[tokio::test]
    async fn test_get_currency_rates_unexpected_status_carries_body() {
        let transport = MockTransport::replying(500, "oops");
        let client = client(transport);

        match client.get_currency_rates().await {
            Err(MonobankError::UnexpectedResponse { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("expected UnexpectedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_user_info_maps_403_to_invalid_token() {
        let transport = MockTransport::replying(403, r#"{"errText":"Unknown 'X-Token'"}"#);
        let client = client(transport);

        assert!(matches!(
            client.get_user_info().await,
            Err(MonobankError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_get_user_info_parses_object() {
        let transport = MockTransport::replying(
            200,
            r#"{"clientId":"3MSaMMtczs","name":"Mariia","permissions":"psfj","accounts":[],"jars":[]}"#,
        );
        let client = client(Arc::clone(&transport));

        let user = client.get_user_info().await.unwrap();
        assert_eq!(user.name, "Mariia");
        assert!(user.has_permission('s'));
        assert_eq!(
            transport.last_request().url,
            "https://api.monobank.ua/personal/client-info"
        );
    }

    #[tokio::test]
    async fn test_set_webhook_rejects_empty_url_before_dispatch() {
        let transport = MockTransport::replying(200, "");
        let client = client(Arc::clone(&transport));

        assert!(matches!(
            client.set_webhook("").await,
            Err(MonobankError::InvalidArgument { name: "newHookUrl" })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_set_webhook_posts_json_payload() {
        let transport = MockTransport::replying(200, "");
        let client = client(Arc::clone(&transport));

        client.set_webhook("https://example.com/hook").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://api.monobank.ua/personal/webhook");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"newHookUrl":"https://example.com/hook"}"#)
        );
    }

    #[tokio::test]
    async fn test_set_webhook_non_200_is_unexpected() {
        let transport = MockTransport::replying(404, "not found");
        let client = client(transport);

        assert!(matches!(
            client.set_webhook("https://example.com/hook").await,
            Err(MonobankError::UnexpectedResponse { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_statement_rejects_empty_account_before_dispatch() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(Arc::clone(&transport));

        assert!(matches!(
            client.get_statement("", utc(0), utc(1)).await,
            Err(MonobankError::InvalidArgument { name: "account" })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_statement_rejects_oversized_period_before_dispatch() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(Arc::clone(&transport));

        let from = utc(1_700_000_000);
        let to = utc(1_700_000_000 + 2_682_001);
        match client.get_statement("0", from, to).await {
            Err(MonobankError::InvalidPeriod { requested }) => {
                assert_eq!(requested, 2_682_001)
            }
            other => panic!("expected InvalidPeriod, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_statement_accepts_period_at_the_bound() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(Arc::clone(&transport));

        let from = utc(1_700_000_000);
        let to = utc(1_700_000_000 + 2_682_000);
        client.get_statement("0", from, to).await.unwrap();
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_statement_builds_unix_second_path() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(Arc::clone(&transport));

        client
            .get_statement("kKGVoZuHWzqVoZuH", utc(1_700_000_000), utc(1_700_086_400))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().url,
            "https://api.monobank.ua/personal/statement/kKGVoZuHWzqVoZuH/1700000000/1700086400"
        );
    }

    #[tokio::test]
    async fn test_second_statement_call_within_a_minute_is_rate_limited() {
        let transport = MockTransport::replying(200, "[]");
        let client = client(Arc::clone(&transport));

        client
            .get_statement("0", utc(0), utc(3600))
            .await
            .unwrap();

        match client.get_statement("0", utc(0), utc(3600)).await {
            Err(MonobankError::RateLimited { retry_in }) => {
                assert!(retry_in >= 1 && retry_in <= 60)
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
        // Only the admitted call reached the transport.
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_statement_maps_403_to_invalid_token() {
        let transport = MockTransport::replying(403, "");
        let client = client(transport);

        assert!(matches!(
            client.get_statement("0", utc(0), utc(3600)).await,
            Err(MonobankError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_get_statement_preserves_api_order() {
        let transport = MockTransport::replying(
            200,
            r#"[
                {"id":"b","time":1700000200,"description":"later","mcc":0,"hold":false,
                 "amount":-2,"operationAmount":-2,"currencyCode":980,"commissionRate":0,
                 "cashbackAmount":0,"balance":8},
                {"id":"a","time":1700000100,"description":"earlier","mcc":0,"hold":false,
                 "amount":-1,"operationAmount":-1,"currencyCode":980,"commissionRate":0,
                 "cashbackAmount":0,"balance":10}
            ]"#,
        );
        let client = client(transport);

        let items = client.get_statement("0", utc(0), utc(3600)).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b");
        assert_eq!(items[1].id, "a");
        assert!(items[0].time > items[1].time);
    }

    #[tokio::test]
    async fn test_create_invoice_round_trip() {
        let transport = MockTransport::replying(
            200,
            r#"{"invoiceId":"abc123","pageUrl":"https://pay.example/abc123"}"#,
        );
        let client = client(Arc::clone(&transport));

        let invoice = Invoice::new(4200).payment_type(PaymentType::Hold);
        let info = client.create_invoice(&invoice).await.unwrap();
        assert_eq!(info.invoice_id, "abc123");
        assert_eq!(info.page_url, "https://pay.example/abc123");

        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://api.monobank.ua/api/merchant/invoice/create"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"amount":4200,"ccy":980,"paymentType":"hold"}"#)
        );
    }

    #[tokio::test]
    async fn test_create_invoice_maps_400_to_invalid_request() {
        let transport = MockTransport::replying(
            400,
            r#"{"errCode":"BAD_REQUEST","errText":"empty amount"}"#,
        );
        let client = client(transport);

        match client.create_invoice(&Invoice::new(0)).await {
            Err(MonobankError::InvalidRequest {
                status,
                err_code,
                message,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(err_code.as_deref(), Some("BAD_REQUEST"));
                assert_eq!(message, "empty amount");
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_invoice_keeps_raw_body_when_error_shape_differs() {
        let transport = MockTransport::replying(404, "no such merchant");
        let client = client(transport);

        match client.create_invoice(&Invoice::new(100)).await {
            Err(MonobankError::InvalidRequest { status, message, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such merchant");
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_invoice_maps_403_to_invalid_token() {
        let transport = MockTransport::replying(403, "");
        let client = client(transport);

        assert!(matches!(
            client.create_invoice(&Invoice::new(100)).await,
            Err(MonobankError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_get_invoice_status_uses_query_parameter() {
        let transport = MockTransport::replying(
            200,
            r#"{"invoiceId":"p2_9ZgpZVsx","status":"success","amount":4200,"ccy":980}"#,
        );
        let client = client(Arc::clone(&transport));

        let status = client.get_invoice_status("p2_9ZgpZVsx").await.unwrap();
        assert!(status.status.is_success());
        assert_eq!(
            transport.last_request().url,
            "https://api.monobank.ua/api/merchant/invoice/status?invoiceId=p2_9ZgpZVsx"
        );
    }

    #[tokio::test]
    async fn test_get_invoice_status_rejects_empty_id_before_dispatch() {
        let transport = MockTransport::replying(200, "{}");
        let client = client(Arc::clone(&transport));

        assert!(matches!(
            client.get_invoice_status("").await,
            Err(MonobankError::InvalidArgument { name: "invoiceId" })
        ));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_every_operation_wraps_transport_failures_uniformly() {
        let assert_transport_failure = |result: Result<()>| match result {
            Err(MonobankError::TransportFailure { source }) => {
                assert!(source.to_string().contains("refused"));
            }
            other => panic!("expected TransportFailure, got {other:?}"),
        };

        let client = client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.get_currency_rates().await.map(|_| ()));

        let client = self::client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.get_user_info().await.map(|_| ()));

        let client = self::client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.set_webhook("https://example.com/h").await);

        let client = self::client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.get_statement("0", utc(0), utc(1)).await.map(|_| ()));

        let client = self::client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.create_invoice(&Invoice::new(1)).await.map(|_| ()));

        let client = self::client(MockTransport::refusing("connection refused"));
        assert_transport_failure(client.get_invoice_status("x").await.map(|_| ()));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_serialization_error() {
        let transport = MockTransport::replying(200, "not json");
        let client = client(transport);

        assert!(matches!(
            client.get_currency_rates().await,
            Err(MonobankError::Serialization(_))
        ));
    }
}
