// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications surface failures and confirmations without blocking the
//! widget: processing errors, unsupported files, and save results.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
