use crate::calendars::{Cal, CalendarConfig};
use crate::json::JSON;

impl JSON for Cal {}
impl JSON for CalendarConfig {}
