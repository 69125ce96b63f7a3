// Chat: the relay endpoint (server side, stateless per request) and the
// widget transcript (client side, the only place conversation state lives).

pub mod handlers;
pub mod transcript;
