use super::entities::Announcement;
use serde::Serialize;

// 公告响应
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub announcement: Announcement,
}

// 公告列表响应（插入顺序，id 升序）
#[derive(Debug, Serialize)]
pub struct AnnouncementListResponse {
    pub items: Vec<Announcement>,
    pub total: usize,
}
