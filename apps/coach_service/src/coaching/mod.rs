pub mod coaching_controller;
pub mod coaching_service;
