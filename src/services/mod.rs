pub mod reconciler;
pub mod topup;

pub use reconciler::{CallbackPayload, CallbackReconciler};
pub use topup::{TopupInput, TopupOutcome, TopupService};
