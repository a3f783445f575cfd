mod reconcile;

pub(super) const GUILD_ID: u64 = 500;
