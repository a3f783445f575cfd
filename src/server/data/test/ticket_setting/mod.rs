use crate::server::{
    data::{store::MemStore, ticket_setting::TicketSettingRepository},
    model::ticket::UpsertTicketSettingParam,
};

mod upsert;
