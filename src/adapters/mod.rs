pub mod postgres_student_directory;
pub mod postgres_transaction_store;

pub use postgres_student_directory::PostgresStudentDirectory;
pub use postgres_transaction_store::PostgresTransactionStore;
