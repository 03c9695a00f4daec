//! Service layer: the typed accessors and the AI relay used by handlers.
//!
//! [`PostService`] and [`VisitService`] sit on top of the shared
//! [`crate::persistence::Store`]; [`AssistantService`] wraps the outbound
//! completion client.

pub mod assistant_service;
pub mod post_service;
pub mod visit_service;

pub use assistant_service::AssistantService;
pub use post_service::PostService;
pub use visit_service::VisitService;
