use askama::Template;

use super::DeckChrome;
use crate::models::review::PresentationRecord;
use crate::presentation::charts::{AreaChart, BarChart, CHART_HEIGHT, CHART_WIDTH};
use crate::presentation::format;

#[derive(Template)]
#[template(path = "slides/intro.html")]
pub struct IntroSlide {
    pub chrome: DeckChrome,
    pub name_input: String,
    pub error: Option<String>,
    pub loading: bool,
    pub locked: bool,
}

#[derive(Template)]
#[template(path = "slides/greeting.html")]
pub struct GreetingSlide {
    pub chrome: DeckChrome,
    pub manufacturer_name: String,
}

impl GreetingSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        GreetingSlide { chrome, manufacturer_name: record.manufacturer_name.clone() }
    }
}

#[derive(Template)]
#[template(path = "slides/origin.html")]
pub struct OriginSlide {
    pub chrome: DeckChrome,
    pub manufacturer_name: String,
    pub first_cooperation_date: String,
    pub first_product: String,
}

impl OriginSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        OriginSlide {
            chrome,
            manufacturer_name: record.manufacturer_name.clone(),
            first_cooperation_date: record.first_cooperation_date.clone(),
            first_product: record.first_product.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "slides/scale.html")]
pub struct ScaleSlide {
    pub chrome: DeckChrome,
    pub total_sales: String,
    pub yoy_growth: String,
}

impl ScaleSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        ScaleSlide {
            chrome,
            total_sales: format::grouped_integer(record.total_sales_2025),
            yoy_growth: format::growth_percent(record.yoy_growth),
        }
    }
}

#[derive(Template)]
#[template(path = "slides/trend.html")]
pub struct TrendSlide {
    pub chrome: DeckChrome,
    pub chart: AreaChart,
    pub width: f64,
    pub height: f64,
}

impl TrendSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        TrendSlide {
            chrome,
            chart: AreaChart::build(&record.monthly_sales),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

#[derive(Template)]
#[template(path = "slides/star_product.html")]
pub struct StarProductSlide {
    pub chrome: DeckChrome,
    pub product_name: String,
    pub total_sales: String,
}

impl StarProductSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        StarProductSlide {
            chrome,
            product_name: record.top_product.name.clone(),
            total_sales: format::ten_thousands(record.top_product.total_sales),
        }
    }
}

#[derive(Template)]
#[template(path = "slides/channel.html")]
pub struct ChannelSlide {
    pub chrome: DeckChrome,
    pub product_name: String,
    pub chart: BarChart,
    pub width: f64,
    pub height: f64,
}

impl ChannelSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        ChannelSlide {
            chrome,
            product_name: record.top_product.name.clone(),
            chart: BarChart::build(&record.top_product.monthly_stores),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

#[derive(Template)]
#[template(path = "slides/highlight.html")]
pub struct HighlightSlide {
    pub chrome: DeckChrome,
    pub month: String,
    pub amount: String,
    pub stores: String,
}

impl HighlightSlide {
    pub fn new(chrome: DeckChrome, record: &PresentationRecord) -> Self {
        let moment = &record.top_product.highlight_moment;
        HighlightSlide {
            chrome,
            month: moment.month.clone(),
            amount: format::grouped(moment.amount),
            stores: format::grouped(moment.stores),
        }
    }
}

#[derive(Template)]
#[template(path = "slides/closing.html")]
pub struct ClosingSlide {
    pub chrome: DeckChrome,
}
