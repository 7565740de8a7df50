use chrono::NaiveDateTime;
use yew::prelude::*;

use crate::content::{self, MonthGrid, KOREAN_WEEKDAYS};

#[derive(Properties, PartialEq)]
pub struct WeddingCalendarProps {
    pub at: NaiveDateTime,
}

#[function_component(WeddingCalendar)]
pub fn wedding_calendar(props: &WeddingCalendarProps) -> Html {
    let Some(grid) = MonthGrid::around(props.at.date()) else {
        return html! {};
    };

    html! {
        <div class="card calendar-card">
            <p class="calendar-title">{content::month_title(&props.at)}</p>
            <div class="calendar-grid">
                { for KOREAN_WEEKDAYS.iter().map(|day| html! {
                    <div key={*day} class="calendar-weekday">{*day}</div>
                }) }
                { for (1..=grid.days).map(|day| {
                    let column = if day == 1 {
                        format!("grid-column-start: {};", grid.column_of(day))
                    } else {
                        String::new()
                    };
                    html! {
                        <div
                            key={day}
                            class={classes!("calendar-day", (day == grid.highlight).then_some("wedding-day"))}
                            style={column}
                        >
                            {day}
                        </div>
                    }
                }) }
            </div>
            <p class="calendar-time">{content::korean_time_line(&props.at)}</p>
        </div>
    }
}
