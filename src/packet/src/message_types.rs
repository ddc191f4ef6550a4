//! Message types understood by the agent's UI.

macro_rules! ui_message_types {
    ($prefix:literal; $($name:ident => $suffix:literal),* $(,)?) => {
        pub const UI_PREFIX: &str = $prefix;

        $(
            pub const $name: &str = concat!($prefix, $suffix);
        )*

        /// All UI message types, in declaration order.
        pub const ALL: &[&str] = &[$($name),*];
    };
}

ui_message_types! {
    "urn:sovrin:agent:message_type:sovrin.org/ui/";
    STATE => "state",
    STATE_REQUEST => "state_request",
    SEND_OFFER => "send_offer",
    SEND_OFFER_ACCEPTED => "send_offer_accepted",
    SENDER_SEND_OFFER_REJECTED => "sender_send_offer_rejected",
    RECEIVER_SEND_OFFER_REJECTED => "receiver_send_offer_rejected",
    SENDER_OFFER_REJECTED => "sender_offer_rejected",
    RECEIVER_OFFER_REJECTED => "receiver_offer_rejected",
    SEND_CONN_REJECTED => "send_connection_rejected",
    INITIALIZE => "initialize",
    OFFER_RECEIVED => "offer_received",
    OFFER_SENT => "offer_sent",
    OFFER_ACCEPTED => "offer_accepted",
    OFFER_ACCEPTED_SENT => "offer_accepted_sent",
    CONN_REJECTED => "connection_rejected",
}
