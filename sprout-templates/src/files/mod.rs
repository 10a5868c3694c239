//! One [`Template`](crate::Template) per generated file.

mod env;
mod gitignore;
mod go_mod;
mod handler_go;
mod main_go;
mod makefile;
mod routes_go;
mod server_go;
mod views;

pub use env::EnvFile;
pub use gitignore::GitIgnore;
pub use go_mod::GoMod;
pub use handler_go::HandlerGo;
pub use main_go::MainGo;
pub use makefile::Makefile;
pub use routes_go::RoutesGo;
pub use server_go::ServerGo;
pub use views::{BaseTempl, HelloTempl};
