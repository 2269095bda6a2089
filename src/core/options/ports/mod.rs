pub mod state_loader;
