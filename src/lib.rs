pub mod photorg_core;
