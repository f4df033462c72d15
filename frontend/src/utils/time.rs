use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use leptos::*;

use crate::config;

/// How often joinability is recomputed. Minute granularity is all the join
/// window promises.
pub const REEVALUATE_INTERVAL_MS: u32 = 60_000;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::current_time_zone())
}

/// Clock signal seeded immediately on mount and refreshed every minute while
/// the owning view is alive. The interval dies with the reactive scope.
pub fn use_minute_ticker() -> ReadSignal<DateTime<Utc>> {
    let (now, set_now) = create_signal(Utc::now());
    #[cfg(target_arch = "wasm32")]
    {
        let interval = gloo_timers::callback::Interval::new(REEVALUATE_INTERVAL_MS, move || {
            set_now.set(Utc::now());
        });
        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;
    now
}

pub fn format_schedule(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time
            .with_timezone(&config::current_time_zone())
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "Time to be confirmed".to_string(),
    }
}
