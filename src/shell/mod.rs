// Composition root for the cylinder test portal.
//
// Responsibilities
// - Hold the shared handlers and the admin token (state).
// - Gate private routes behind the admin token (auth).
// - Assemble the HTTP router and the GraphQL schema.
// - The binary in main.rs reads config, picks a store and serves the router.

pub mod auth;
pub mod graphql;
pub mod http;
pub mod state;
