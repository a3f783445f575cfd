mod channel;
mod ticket_setting;
