//! Fixtures shared by tests in this and downstream crates.
use log::debug;

use crate::{PendingReceipt, PendingTransaction, VendorKey};

pub fn prepare_test_env() {
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
}

pub fn vendor(key: &str) -> VendorKey {
    VendorKey::new(key).expect("Test vendor keys must not be blank")
}

pub fn transaction(id: &str, amount: &str, vendor_key: &str) -> PendingTransaction {
    PendingTransaction::new(id, amount, vendor(vendor_key))
}

pub fn receipt(id: &str, vendor_key: &str, body_html: &str) -> PendingReceipt {
    PendingReceipt::new(id, vendor(vendor_key), body_html)
}
