//! Page-level operations: a mutation followed by an awaited reload.

pub mod branches;
pub mod cases;
pub mod clients;

pub use branches::{BranchBoard, BranchWorkflow};
pub use cases::{AfterMutation, AssignDialog, CaseBoard, CaseWorkflow};
pub use clients::{ClientWorkflow, RejectPrompt};
