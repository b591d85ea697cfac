//! Dashboard feed aggregation.

use std::sync::Arc;

use serde::Serialize;

use campus_core::result::AppResult;
use campus_database::repositories::announcement::AnnouncementRepository;
use campus_database::repositories::notification::NotificationRepository;
use campus_entity::announcement::Announcement;
use campus_entity::interview::InterviewItem;
use campus_entity::notification::NotificationWithRead;

use crate::context::RequestContext;
use crate::finance::FinanceService;
use crate::interviews::InterviewService;

const FEED_ITEMS: i64 = 5;

/// Condensed fee figures for the dashboard card.
#[derive(Debug, Clone, Serialize)]
pub struct FeedFees {
    /// Total in scope.
    pub total: f64,
    /// Outstanding in scope.
    pub due: f64,
    /// Ledger entry count in scope.
    pub transactions: i64,
}

/// The aggregated dashboard feed.
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    /// Fee card figures.
    pub fees: FeedFees,
    /// Latest announcements.
    pub announcements: Vec<Announcement>,
    /// Latest notifications visible to the caller.
    pub notifications: Vec<NotificationWithRead>,
    /// Latest interview items under the caller's scope.
    pub interviews: Vec<InterviewItem>,
}

/// Builds the dashboard feed from the other services.
pub struct FeedService {
    finance: Arc<FinanceService>,
    interviews: Arc<InterviewService>,
    announcement_repo: Arc<AnnouncementRepository>,
    notification_repo: Arc<NotificationRepository>,
}

impl FeedService {
    /// Create a feed service.
    pub fn new(
        finance: Arc<FinanceService>,
        interviews: Arc<InterviewService>,
        announcement_repo: Arc<AnnouncementRepository>,
        notification_repo: Arc<NotificationRepository>,
    ) -> Self {
        Self {
            finance,
            interviews,
            announcement_repo,
            notification_repo,
        }
    }

    /// Assemble the feed for the calling principal.
    pub async fn feed(&self, ctx: &RequestContext) -> AppResult<Feed> {
        let summary = self.finance.summary(ctx).await?;
        let announcements = self.announcement_repo.list(FEED_ITEMS).await?;
        let notifications = self
            .notification_repo
            .list_for(&ctx.principal, FEED_ITEMS)
            .await?;
        let mut interviews = self.interviews.list(&ctx.scope()).await?;
        interviews.truncate(FEED_ITEMS as usize);

        Ok(Feed {
            fees: FeedFees {
                total: summary.total,
                due: summary.due,
                transactions: summary.transactions,
            },
            announcements,
            notifications,
            interviews,
        })
    }
}
