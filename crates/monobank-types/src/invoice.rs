//! Merchant invoicing types: invoice creation requests and the responses
//! describing created invoices and their lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operation type for an invoice payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Funds are debited immediately.
    Debit,
    /// Funds are held for up to 9 days; the hold must be finalized or it is
    /// cancelled.
    Hold,
}

impl Default for PaymentType {
    fn default() -> Self {
        Self::Debit
    }
}

/// One position of the order basket shown to the payer in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketOrder {
    /// Name of the good or service.
    pub name: String,
    /// Quantity in the order.
    pub qty: i32,
    /// Total price of the position in minor units.
    pub sum: i64,
    /// Link to the icon of the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Measurement unit label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Product code, required for fiscalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Barcode value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Text displayed before the position name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Text displayed after the position name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Tax codes registered for the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Vec<i32>>,
    /// UKT ZED classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uktzed: Option<String>,
}

impl BasketOrder {
    /// Create a basket position with the required fields.
    pub fn new(name: impl Into<String>, qty: i32, sum: i64) -> Self {
        Self {
            name: name.into(),
            qty,
            sum,
            icon: None,
            unit: None,
            code: None,
            barcode: None,
            header: None,
            footer: None,
            tax: None,
            uktzed: None,
        }
    }
}

/// Merchant-side payment details attached to an invoice: bill reference,
/// destination text, and the order basket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantPaymentInfo {
    /// Merchant's bill or order reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Payment destination text shown to the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Order positions displayed in the app.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub basket_order: Vec<BasketOrder>,
}

/// Card tokenization request attached to an invoice. Disabled by default on
/// the API side; requires activation by support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCardData {
    /// Whether to tokenize the payer's card.
    pub save_card: bool,
    /// Wallet to attach the token to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

/// Request body for creating an invoice.
///
/// `amount` is the only required field and is fixed at construction; the
/// currency defaults to 980 (hryvnia) explicitly. The remaining fields are
/// set fluently and skipped on the wire when absent:
///
/// ```
/// use monobank_types::Invoice;
///
/// let invoice = Invoice::new(4200)
///     .redirect_url("https://shop.example/thanks")
///     .validity(3600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Amount in minor units of the invoice currency.
    pub amount: i64,
    /// ISO 4217 numeric currency code.
    pub ccy: i32,
    /// Merchant payment details.
    #[serde(
        rename = "merchantPaymInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub merchant_payment_info: Option<MerchantPaymentInfo>,
    /// URL the payer is redirected to after payment, success or failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// URL notified on every status change of the invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_url: Option<String>,
    /// Validity period in seconds; the API default is 24 hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<i64>,
    /// Operation type; the API default is debit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// QR identifier used to set a payment amount on a static QR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_id: Option<String>,
    /// Card tokenization request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_card_data: Option<SaveCardData>,
}

impl Invoice {
    /// Default invoice currency: 980, Ukrainian hryvnia.
    pub const DEFAULT_CCY: i32 = 980;

    /// Create an invoice for `amount` minor units in hryvnia.
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            ccy: Self::DEFAULT_CCY,
            merchant_payment_info: None,
            redirect_url: None,
            web_hook_url: None,
            validity: None,
            payment_type: None,
            qr_id: None,
            save_card_data: None,
        }
    }

    /// Override the invoice currency.
    pub fn ccy(mut self, ccy: i32) -> Self {
        self.ccy = ccy;
        self
    }

    /// Attach merchant payment details.
    pub fn merchant_payment_info(mut self, info: MerchantPaymentInfo) -> Self {
        self.merchant_payment_info = Some(info);
        self
    }

    /// Set the post-payment redirect URL.
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Set the status-change webhook URL.
    pub fn web_hook_url(mut self, url: impl Into<String>) -> Self {
        self.web_hook_url = Some(url.into());
        self
    }

    /// Set the validity period in seconds.
    pub fn validity(mut self, seconds: i64) -> Self {
        self.validity = Some(seconds);
        self
    }

    /// Set the operation type.
    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    /// Bind the invoice to a static QR identifier.
    pub fn qr_id(mut self, qr_id: impl Into<String>) -> Self {
        self.qr_id = Some(qr_id.into());
        self
    }

    /// Request card tokenization.
    pub fn save_card_data(mut self, data: SaveCardData) -> Self {
        self.save_card_data = Some(data);
        self
    }
}

/// Response to a successful invoice creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInfo {
    /// Unique identifier of the created invoice.
    pub invoice_id: String,
    /// Payment page URL to present to the payer.
    pub page_url: String,
}

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    /// Invoice created, not yet paid.
    Created,
    /// Payment in progress.
    Processing,
    /// Funds held, awaiting finalization.
    Hold,
    /// Payment completed.
    Success,
    /// Payment failed.
    Failure,
    /// Payment reversed after completion.
    Reversed,
    /// Invoice expired unpaid.
    Expired,
}

impl InvoiceState {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Success | Self::Failure | Self::Reversed | Self::Expired
        )
    }

    /// Check if the invoice was paid successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One cancellation applied to a paid invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelItem {
    /// Cancellation processing status.
    pub status: String,
    /// Cancelled amount in minor units.
    pub amount: i64,
    /// ISO 4217 numeric currency code.
    pub ccy: i32,
    /// When the cancellation was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the cancellation last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    /// Authorization approval code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_code: Option<String>,
    /// Retrieval reference number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrn: Option<String>,
    /// Merchant's external reference for the cancellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_ref: Option<String>,
}

/// One split of a paid invoice towards a recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitItem {
    /// Recipient's tax identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin: Option<String>,
    /// Recipient's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recipient's IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Split amount in minor units.
    pub amount: i64,
    /// ISO 4217 numeric currency code.
    pub ccy: i32,
    /// Split processing status.
    pub status: String,
}

/// Tokenized-card information returned when the payer saved their card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletData {
    /// Card token.
    pub card_token: String,
    /// Identifier of the payer's wallet.
    pub wallet_id: String,
    /// Tokenization status: "new", "created", "failure".
    pub status: String,
}

/// Detailed status of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStatus {
    /// Identifier of the invoice.
    pub invoice_id: String,
    /// Current lifecycle state.
    pub status: InvoiceState,
    /// Reason for failure, present only in the failure state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Invoiced amount in minor units.
    pub amount: i64,
    /// ISO 4217 numeric currency code.
    pub ccy: i32,
    /// Final amount after cancellations, minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<i64>,
    /// When the invoice was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the invoice last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    /// Merchant's bill or order reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Cancellations applied to the invoice.
    #[serde(rename = "cancelList", default, skip_serializing_if = "Vec::is_empty")]
    pub cancels: Vec<CancelItem>,
    /// Splits applied to the invoice.
    #[serde(rename = "splitList", default, skip_serializing_if = "Vec::is_empty")]
    pub splits: Vec<SplitItem>,
    /// Tokenized-card information, when the payer saved their card.
    #[serde(rename = "walletData", default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletData>,
}
