//! 通知内容提取 - 从快照组装可展示文本
//!
//! 展示正文的回退链：多行正文 → 单段正文 → ticker 文本 → 空串。
//! 正文提取永远返回字符串，调用方不需要做缺失检查。

use crate::snapshot::NotificationSnapshot;

/// 槽位描述符的分隔符
pub const DELIMITER: &str = "|";

/// 连接多行正文，每行末尾追加一个换行符
///
/// 多行字段缺失时返回空串。空行也会产生一个换行符，
/// 因此 `[""]` 的结果是 `"\n"` 而不是空串。
pub fn text_lines_joined(snapshot: &NotificationSnapshot) -> String {
    let mut buffer = String::new();
    if let Some(lines) = snapshot.text_lines() {
        for line in lines {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
    buffer
}

/// 提取展示正文（永不缺失）
///
/// 回退链：
/// 1. 多行正文连接结果非空 → 直接使用
/// 2. 否则使用单段正文；注意单段正文**存在但为空串**时按存在处理
/// 3. 单段正文缺失时回退到 ticker 文本
/// 4. 全部缺失时返回空串
pub fn display_body(snapshot: &NotificationSnapshot) -> String {
    let joined = text_lines_joined(snapshot);
    if !joined.is_empty() {
        return joined;
    }

    match snapshot.text() {
        Some(text) => text.to_string(),
        None => snapshot.ticker().unwrap_or("").to_string(),
    }
}

/// 构造槽位描述符：`包名|id|tag`
///
/// tag 缺失时使用字面量 `"null"` 占位，保留"无 tag"与"空 tag"的区分，
/// 描述符用于日志与人工排查，不回写平台。
pub fn slot_descriptor(snapshot: &NotificationSnapshot) -> String {
    let tag = snapshot.tag.as_deref().unwrap_or("null");
    format!(
        "{}{}{}{}{}",
        snapshot.package_name, DELIMITER, snapshot.id, DELIMITER, tag
    )
}
