//! Typed Zabbix API objects.
//!
//! Every object that supports the `get/create/update/delete` verbs implements
//! [`crate::zbx_client::Resource`], so the generic operations on
//! [`crate::ZbxClient`] work with it.

pub mod action;
pub mod application;
pub mod common;
pub mod event;
pub mod host;
pub mod host_group;
pub mod host_interface;
pub mod item;
pub mod item_prototype;
pub mod lld_rule;
pub mod template;
pub mod template_group;
pub mod trigger;
pub mod trigger_prototype;
pub mod user;
pub mod user_group;

pub use action::{Action, Actions};
pub use application::{Application, Applications};
pub use common::{HostGroupId, HostId, Macro, Tag, TemplateId, TriggerId, UserGroupId};
pub use event::{Event, EventSource, Events};
pub use host::{Host, Hosts};
pub use host_group::{HostGroup, HostGroups};
pub use host_interface::{HostInterface, HostInterfaces, InterfaceType};
pub use item::{Item, ItemType, Items, ValueType};
pub use item_prototype::{ItemPrototype, ItemPrototypes};
pub use lld_rule::{LldRule, LldRules};
pub use template::{Template, Templates};
pub use template_group::{TemplateGroup, TemplateGroups};
pub use trigger::{Trigger, Triggers};
pub use trigger_prototype::{TriggerPrototype, TriggerPrototypes};
pub use user::{User, UserType, Users};
pub use user_group::{UserGroup, UserGroups};
