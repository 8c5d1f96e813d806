//! Charge orchestration: turns a validated top-up request into a gateway
//! charge and a persisted transaction.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::{Bank, PaymentMethod, Transaction};
use crate::error::AppError;
use crate::midtrans::{
    BankTransferDetails, ChargeRequest, CustomerDetails, EchannelDetails, PaymentGateway,
    TransactionDetails,
};
use crate::ports::{PaymentAttachment, StudentDirectory, TransactionStore};
use crate::validation;

#[derive(Debug, Clone)]
pub struct TopupInput {
    pub bank: String,
    pub amount: BigDecimal,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct TopupOutcome {
    pub order_id: String,
}

pub struct TopupService {
    store: Arc<dyn TransactionStore>,
    students: Arc<dyn StudentDirectory>,
    gateway: Arc<dyn PaymentGateway>,
}

impl TopupService {
    pub fn new(
        store: Arc<dyn TransactionStore>,
        students: Arc<dyn StudentDirectory>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            store,
            students,
            gateway,
        }
    }

    /// Runs one charge attempt for the account behind `nouid`.
    ///
    /// The pending row is inserted before the gateway call so that a
    /// timeout or crash still leaves an auditable record; a gateway
    /// failure afterwards marks that same row failed.
    pub async fn charge(&self, nouid: &str, input: TopupInput) -> Result<TopupOutcome, AppError> {
        validation::validate_required("bank", &input.bank)?;
        validation::validate_topup_amount(&input.amount)?;
        validation::validate_phone(&input.phone)?;

        let bank = Bank::from_code(input.bank.trim())
            .ok_or_else(|| AppError::UnsupportedBank(input.bank.clone()))?;

        let student = self
            .students
            .find_by_nouid(nouid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account {} not found", nouid)))?;

        let order_id = format!("topup-{}", Uuid::new_v4().simple());
        let method = bank.payment_method();

        let request = ChargeRequest {
            payment_type: method,
            transaction_details: TransactionDetails {
                order_id: order_id.clone(),
                gross_amount: input.amount.clone(),
            },
            customer_details: CustomerDetails {
                first_name: student.display_name().to_string(),
                phone: input.phone.clone(),
            },
            bank_transfer: match method {
                PaymentMethod::BankTransfer => Some(BankTransferDetails { bank }),
                _ => None,
            },
            echannel: match method {
                PaymentMethod::Echannel => Some(EchannelDetails {
                    bill_info1: "Payment:".to_string(),
                    bill_info2: format!("Topup for {}", student.display_full_name()),
                }),
                _ => None,
            },
        };

        let tx = Transaction::new(
            nouid.to_string(),
            order_id.clone(),
            input.amount.clone(),
            bank,
            input.phone.clone(),
        );
        self.store.insert(&tx).await?;

        match self.gateway.charge(&request).await {
            Ok(response) => {
                let attachment = PaymentAttachment {
                    va_number: response.payment_reference(method).map(str::to_owned),
                    expiry_time: response.expiry_time.clone(),
                    payment_data: response.to_value(),
                };
                self.store.attach_payment(&order_id, &attachment).await?;

                tracing::info!(
                    "topup charge created: order_id={} bank={} method={}",
                    order_id,
                    bank.code(),
                    method.code()
                );

                Ok(TopupOutcome { order_id })
            }
            Err(err) => {
                // Detail goes to the row and the log; the caller only
                // ever sees the generic failure body.
                tracing::error!("topup charge failed: order_id={} error={}", order_id, err);

                if let Err(store_err) = self.store.mark_failed(&order_id, &err.to_string()).await {
                    tracing::error!(
                        "could not record charge failure: order_id={} error={}",
                        order_id,
                        store_err
                    );
                }

                Err(AppError::Gateway)
            }
        }
    }
}
