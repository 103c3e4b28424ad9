//! Built-in vendor integrations.

pub mod check_point_firewall;
pub mod cisco_amp;
pub mod gmail;
pub mod misp;
pub mod shodan;
pub mod slack;

use crate::catalog::Integration;

/// Every integration shipped with the crate.
pub static BUILTIN: [&Integration; 6] = [
    &slack::INTEGRATION,
    &gmail::INTEGRATION,
    &check_point_firewall::INTEGRATION,
    &cisco_amp::INTEGRATION,
    &shodan::INTEGRATION,
    &misp::INTEGRATION,
];
