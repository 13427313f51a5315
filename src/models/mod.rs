//! Schema-less models for API responses.
//!
//! API responses come in several shapes: a single object, an array, or an
//! error envelope. Rather than modelling every endpoint, responses are mapped
//! into a uniform object graph that callers traverse by field name.
//!
//! # Overview
//!
//! - [`construct_object_from_data`]: Map a JSON object or array
//! - [`construct_error_from_data`]: Build an error object from an error envelope
//! - [`GenericObject`]: Fields by name, with `None` for fields that were never set
//! - [`ObjectSequence`]: Ordered items of a JSON array
//! - [`FieldValue`]: A scalar, nested object or nested sequence
//! - [`ErrorInfo`]: Error details from an error envelope
//!
//! # Example
//!
//! ```rust
//! use brickscout_api::models::{construct_error_from_data, construct_object_from_data};
//! use serde_json::json;
//!
//! let body = json!({"id": 42, "status": "PAID"});
//! let order = construct_object_from_data(&body).unwrap().into_object().unwrap();
//! assert_eq!(order.get_str("status"), Some("PAID"));
//! assert_eq!(order.get_str("tracking_code"), None);
//!
//! let body = json!({
//!     "type": "NotFound",
//!     "exceptionCode": "ORDER_NOT_FOUND",
//!     "developerMessage": "No order with id 43",
//!     "moreInfoUrl": "https://docs.example.com/errors",
//!     "timeStamp": "2024-05-01T12:00:00Z"
//! });
//! let failed = construct_error_from_data(&body).unwrap();
//! assert!(failed.has_error());
//! ```

mod error_info;
mod errors;
mod mapper;
mod object;
mod sequence;
mod value;

pub use error_info::ErrorInfo;
pub use errors::MapperError;
pub use mapper::{construct_error_from_data, construct_object_from_data, MappedResponse};
pub use object::GenericObject;
pub use sequence::ObjectSequence;
pub use value::FieldValue;
