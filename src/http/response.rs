/// Status code the Notifier answers with when it accepts a notification.
pub const STATUS_ACCEPTED: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Only an exact 200 counts; other 2xx codes are rejections.
    pub fn is_accepted(&self) -> bool {
        self.status == STATUS_ACCEPTED
    }
}
