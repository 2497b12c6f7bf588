//! Invoice calculation.
//!
//! A pure function over a cart's current lines joined with their items. No
//! IO; the ledger feeds it inside a read transaction.

pub mod invoice;

pub use invoice::{invoice_for, CartInvoice, InvoiceLine};
