pub mod call;
pub mod case;
pub mod descriptor;
pub mod email;
pub mod entity;
pub mod naming;
pub mod outcome;
pub mod parameters;
pub mod request;
pub mod scope;
pub mod types;

pub use call::{ActionCall, ArgumentError};
pub use case::{CasePriority, CloseReason, UnknownCloseReason, UnknownPriority};
pub use descriptor::{ActionDescriptor, ParamKind, ParamSpec};
pub use email::{EmailContent, EmailContentType};
pub use entity::TargetEntity;
pub use naming::{normalize_integration_name, to_snake_case};
pub use outcome::{ActionFailure, ActionOutcome, FailureKind, STATUS_FAILED};
pub use parameters::{ScriptParameters, encode_script_parameters};
pub use request::{ACTION_PROVIDER, ActionProperties, ManualActionRequest};
pub use scope::{DEFAULT_SCOPE, ScopeSet, TargetSelection};
pub use types::{AlertId, CaseId, InstanceId};
