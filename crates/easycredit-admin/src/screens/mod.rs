//! The back office list screens
//!
//! | Screen | Endpoint | Envelope | Category field |
//! |---|---|---|---|
//! | [`Customers`] | `/admin/customers` | `data` | `status` |
//! | [`Loans`] | `/admin/loans` | `data.data` | `status` |
//! | [`Bills`] | `/admin/bills` | `data` | `status` |
//! | [`KycSubmissions`] | `/admin/kyc` | `data.data` | `status` |
//! | [`Complaints`] | `/admin/complaints` | `data` | `status` |
//! | [`Roles`] | `/admin/roles` | bare | `type` |
//! | [`Staff`] | `/admin/staff` | `data` | `role` |
//! | [`ChatSessions`] | `/admin/chats` | `data` | `status` |
//! | [`Transfers`] | `/admin/transactions` | `data.data` | `type` |

pub mod bills;
pub mod chat;
pub mod complaints;
pub mod customers;
pub mod kyc;
pub mod loans;
pub mod roles;
pub mod staff;
pub mod transfers;

pub use bills::{Bill, Bills};
pub use chat::{ChatSession, ChatSessions};
pub use complaints::{Complaint, Complaints};
pub use customers::{Customer, Customers};
pub use kyc::{KycSubmission, KycSubmissions};
pub use loans::{Loan, LoanApplicant, Loans};
pub use roles::{Role, Roles};
pub use staff::{Staff, StaffMember};
pub use transfers::{Transfer, Transfers};
