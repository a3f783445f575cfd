use crate::server::{
    data::{channel::ChannelRepository, store::MemStore},
    error::store::StoreError,
    model::channel::CreateChannelParam,
};

mod create;
mod delete;
mod find_by_location;

fn param(discord_channel_id: &str, name: &str, category: &str) -> CreateChannelParam {
    CreateChannelParam {
        discord_channel_id: discord_channel_id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        read_only: true,
    }
}
