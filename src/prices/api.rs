use chrono::NaiveDate;

use crate::{
    core::{Format, Response, TiingoClient, TiingoError, wire::fmt_date},
    prices::{Frequency, model::PriceBar},
};

pub(super) async fn fetch_prices(
    client: &TiingoClient,
    ticker: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    frequency: Frequency,
    fmt: Format,
) -> Result<Response<PriceBar>, TiingoError> {
    if let (Some(s), Some(e)) = (start, end)
        && s > e
    {
        return Err(TiingoError::InvalidDates);
    }

    let mut url = client.endpoint_url(&["tiingo", "daily", ticker, "prices"])?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(d) = start {
            qp.append_pair("startDate", &fmt_date(d));
        }
        if let Some(d) = end {
            qp.append_pair("endDate", &fmt_date(d));
        }
        qp.append_pair("resampleFreq", frequency.as_str());
        qp.append_pair("format", fmt.wire_format());
    }

    let req = client.api_request("ticker_price", ticker, url, fmt)?;
    client.execute(req, fmt).await
}
