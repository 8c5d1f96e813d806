pub mod bank;
pub mod notification;
pub mod student;
pub mod transaction;

pub use bank::{Bank, PaymentMethod};
pub use notification::{resolve_status, FraudStatus, NotificationStatus};
pub use student::Student;
pub use transaction::{Transaction, TransactionStatus};
