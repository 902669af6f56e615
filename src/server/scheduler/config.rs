pub mod offer_release {
    /// Maximum number of offers released per scan.
    pub const BATCH_LIMIT: u64 = 500;

    /// Cron expression for the offer release scan
    /// Runs every 10 minutes (00:00, 00:10, 00:20, etc.)
    pub const CRON_EXPRESSION: &str = "0 */10 * * * *";
}

pub mod vip_subscription {
    /// Maximum number of subscriptions expired per scan.
    pub const BATCH_LIMIT: u64 = 500;

    /// Cron expression for the subscription expiry scan
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}

pub mod ad_expiry {
    /// Maximum number of ads deactivated per scan.
    pub const BATCH_LIMIT: u64 = 500;

    /// Cron expression for the ad expiry scan
    /// Runs every hour at half past, offset from the subscription scan
    pub const CRON_EXPRESSION: &str = "0 30 * * * *";
}
