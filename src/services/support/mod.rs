pub mod support_tools_service;

pub use support_tools_service::SupportToolsService;
