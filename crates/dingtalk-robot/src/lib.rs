//! DingTalk custom-robot webhook client.
//!
//! Builds one of the typed message payloads, optionally attaches @-mention
//! metadata, signs the request with the robot's shared secret (millisecond
//! timestamp + HMAC-SHA256, base64-encoded), and posts the envelope to the
//! webhook endpoint, returning the decoded JSON response as a loosely typed
//! map.
//!
//! ```no_run
//! use dingtalk_robot::{Robot, SendOptions};
//!
//! # async fn example() -> dingtalk_robot::RobotResult<()> {
//! let robot = Robot::new("access-token", "secret");
//! let response = robot
//!     .send_text("deploy finished", SendOptions::default().with_at_all(true))
//!     .await?;
//! println!("errcode = {:?}", response.get("errcode"));
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod error;
pub mod message;
pub mod options;
pub mod robot;
pub mod sign;
pub mod transport;

pub use error::{RobotError, RobotResult};
pub use message::{
    ActionCardButton, FeedCard, FeedCardLink, Link, Markdown, Message, MultiActionCard,
    SingleActionCard, Text,
};
pub use options::{DEFAULT_TIMEOUT, Mention, SendOptions};
pub use robot::{DEFAULT_WEBHOOK_URL, Robot};
pub use sign::{Signature, sign, sign_at};
pub use transport::{MockTransport, ReqwestTransport, ResponseMap, Transport, TransportRequest};
