use crate::config::Config;
use chrono::NaiveDateTime;

pub struct DateTimeGenerator {
    config: Config,
}

impl DateTimeGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// UTC timestamps: `24 / hourly_increment` per configured date, from midnight.
    pub fn generate_datetime_series(&self) -> Vec<NaiveDateTime> {
        let step = self.config.hourly_increment() as usize;

        self.config
            .dates()
            .flat_map(|date| {
                (0..24)
                    .step_by(step)
                    .filter_map(move |hour| date.and_hms_opt(hour, 0, 0))
            })
            .collect()
    }
}
