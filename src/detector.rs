//! 通知变更检测 - 判断新快照是否需要重新展示
//!
//! 对同一槽位的新旧两份快照做结构化比对，严格三级短路判定：
//! 1. ticker 文本不同 → 展示
//! 2. ticker 相同（含双方缺失）时比较标题，不同 → 展示
//! 3. 标题也相同时比较发布时间，不同 → 展示；完全相同 → 抑制
//!
//! 没有模糊匹配、没有防抖、没有限流，只有带缺失语义的逐字段相等性
//! 比较（缺失只等于缺失）。

use serde::Serialize;
use tracing::debug;

use crate::content::slot_descriptor;
use crate::snapshot::NotificationSnapshot;

/// 比对结论
///
/// 记录触发展示的那一级比较，用于日志与 CLI 输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayDecision {
    /// ticker 文本变化
    TickerChanged,
    /// 标题变化
    TitleChanged,
    /// 发布时间变化
    PostTimeChanged,
    /// 无变化，视为同一通知事件
    Unchanged,
}

impl DisplayDecision {
    /// 是否需要重新展示
    pub fn should_display(&self) -> bool {
        !matches!(self, DisplayDecision::Unchanged)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayDecision::TickerChanged => "ticker_changed",
            DisplayDecision::TitleChanged => "title_changed",
            DisplayDecision::PostTimeChanged => "post_time_changed",
            DisplayDecision::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for DisplayDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 比对新旧快照，返回触发展示的比较级别
///
/// 比对假定两份快照属于同一会话/槽位，识别字段（包名、id、tag）
/// 不参与比较。
pub fn display_decision(
    old: &NotificationSnapshot,
    new: &NotificationSnapshot,
) -> DisplayDecision {
    if new.ticker() != old.ticker() {
        return DisplayDecision::TickerChanged;
    }

    if new.title() != old.title() {
        return DisplayDecision::TitleChanged;
    }

    if new.posted_at_ms != old.posted_at_ms {
        return DisplayDecision::PostTimeChanged;
    }

    DisplayDecision::Unchanged
}

/// 判断新快照是否应取代旧快照重新展示
///
/// `true` 表示展示，`false` 表示抑制（同一通知事件重复投递）。
pub fn should_display(old: &NotificationSnapshot, new: &NotificationSnapshot) -> bool {
    let decision = display_decision(old, new);
    debug!(
        slot = %slot_descriptor(new),
        decision = %decision,
        "Notification compared"
    );
    decision.should_display()
}
