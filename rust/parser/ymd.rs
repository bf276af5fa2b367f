//! Year / month / day disambiguation for the numeric parts of a date string.

/// Failures carry only a reason; the caller attaches the full input text.
pub(crate) type YmdResult<T> = std::result::Result<T, String>;

/// What a collected value is known to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Label {
    Year,
    Month,
    Day,
}

impl Label {
    fn name(self) -> &'static str {
        match self {
            Label::Year => "year",
            Label::Month => "month",
            Label::Day => "day",
        }
    }
}

/// Resolved components, any of which may be absent from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl Resolved {
    fn new(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> Self {
        Resolved { year, month, day }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// Up to three date values in input order, with whichever positions are already known.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ymd {
    values: Vec<i32>,
    /// Set when a year was written with more than two digits.
    pub century_specified: bool,
    year_idx: Option<usize>,
    month_idx: Option<usize>,
    day_idx: Option<usize>,
}

impl Ymd {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a numeric token. Tokens longer than two digits are always years.
    pub fn append_str(&mut self, token: &str, label: Option<Label>) -> YmdResult<()> {
        let value: i32 = token
            .parse()
            .map_err(|_| format!("number '{}' is too large", token))?;
        let label = if token.len() > 2 {
            self.century_specified = true;
            match label {
                None | Some(Label::Year) => Some(Label::Year),
                Some(_) => return Err(format!("'{}' is too large for a day or month", token)),
            }
        } else {
            label
        };
        self.append(value, label)
    }

    /// Append a value with an optional known position.
    pub fn append(&mut self, value: i32, label: Option<Label>) -> YmdResult<()> {
        if self.values.len() == 3 {
            return Err("more than three date values".to_string());
        }
        let label = if value > 100 {
            self.century_specified = true;
            Some(Label::Year)
        } else {
            label
        };
        let idx = self.values.len();
        if let Some(label) = label {
            let slot = match label {
                Label::Year => &mut self.year_idx,
                Label::Month => &mut self.month_idx,
                Label::Day => &mut self.day_idx,
            };
            if slot.is_some() {
                return Err(format!("{} given more than once", label.name()));
            }
            *slot = Some(idx);
        }
        self.values.push(value);
        Ok(())
    }

    fn labelled(&self) -> usize {
        [self.year_idx, self.month_idx, self.day_idx]
            .iter()
            .filter(|i| i.is_some())
            .count()
    }

    /// Resolve positions into year, month and day.
    ///
    /// Values whose position is unknown are assigned by magnitude first (anything above 31
    /// must be a year, anything above 12 cannot be a month) and then by `day_first`.
    /// A leading year is always followed by month then day.
    pub fn resolve(&self, day_first: bool) -> YmdResult<Resolved> {
        let labelled = self.labelled();
        let n = self.len();
        if n == 0 {
            return Ok(Resolved::default());
        }
        if (n == labelled) || (n == 3 && labelled == 2) {
            return Ok(self.resolve_from_labels());
        }

        let v = &self.values;
        let resolved = match n {
            1 => {
                if self.month_idx.is_some() {
                    Resolved::new(None, Some(v[0]), None)
                } else if v[0] > 31 {
                    Resolved::new(Some(v[0]), None, None)
                } else {
                    Resolved::new(None, None, Some(v[0]))
                }
            }
            2 => {
                if let Some(m) = self.month_idx {
                    let other = v[1 - m];
                    if other > 31 {
                        Resolved::new(Some(other), Some(v[m]), None)
                    } else {
                        Resolved::new(None, Some(v[m]), Some(other))
                    }
                } else if v[0] > 31 {
                    Resolved::new(Some(v[0]), Some(v[1]), None)
                } else if v[1] > 31 {
                    Resolved::new(Some(v[1]), Some(v[0]), None)
                } else if day_first && v[1] <= 12 {
                    Resolved::new(None, Some(v[1]), Some(v[0]))
                } else {
                    Resolved::new(None, Some(v[0]), Some(v[1]))
                }
            }
            _ => match self.month_idx {
                Some(0) => {
                    if v[1] > 31 {
                        Resolved::new(Some(v[1]), Some(v[0]), Some(v[2]))
                    } else {
                        Resolved::new(Some(v[2]), Some(v[0]), Some(v[1]))
                    }
                }
                Some(1) => {
                    if v[0] > 31 {
                        Resolved::new(Some(v[0]), Some(v[1]), Some(v[2]))
                    } else {
                        Resolved::new(Some(v[2]), Some(v[1]), Some(v[0]))
                    }
                }
                Some(_) => {
                    if v[1] > 31 {
                        Resolved::new(Some(v[1]), Some(v[2]), Some(v[0]))
                    } else {
                        Resolved::new(Some(v[0]), Some(v[2]), Some(v[1]))
                    }
                }
                None => {
                    if v[0] > 31 || self.year_idx == Some(0) {
                        Resolved::new(Some(v[0]), Some(v[1]), Some(v[2]))
                    } else if v[0] > 12 || (day_first && v[1] <= 12) {
                        Resolved::new(Some(v[2]), Some(v[1]), Some(v[0]))
                    } else {
                        Resolved::new(Some(v[2]), Some(v[0]), Some(v[1]))
                    }
                }
            },
        };
        Ok(resolved)
    }

    fn resolve_from_labels(&self) -> Resolved {
        let mut year_idx = self.year_idx;
        let mut month_idx = self.month_idx;
        let mut day_idx = self.day_idx;
        if self.len() == 3 {
            // exactly one position is unlabelled: give it the missing role
            let used = [year_idx, month_idx, day_idx];
            if let Some(free) = (0..3).find(|i| !used.contains(&Some(*i))) {
                if year_idx.is_none() {
                    year_idx = Some(free);
                } else if month_idx.is_none() {
                    month_idx = Some(free);
                } else if day_idx.is_none() {
                    day_idx = Some(free);
                }
            }
        }
        Resolved::new(
            year_idx.map(|i| self.values[i]),
            month_idx.map(|i| self.values[i]),
            day_idx.map(|i| self.values[i]),
        )
    }
}
