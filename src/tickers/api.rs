use std::io::{Cursor, Read};

use csv::StringRecord;
use serde_json::Value;

use crate::{
    core::{Format, Record, Response, TiingoClient, TiingoError, decode::shape},
    tickers::model::TickerListing,
};

const ENDPOINT: &str = "supported_tickers";
const ASSET_TYPE_COLUMN: &str = "assetType";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

pub(super) async fn fetch_listing(
    client: &TiingoClient,
    asset_types: &[&str],
    fmt: Format,
) -> Result<Response<TickerListing>, TiingoError> {
    let req = TiingoClient::public_request(ENDPOINT, "all", client.listing_url().clone(), "zip");
    let raw = client.send_classified(&req).await?;

    let text = unpack(&raw.body)?;
    let (headers, rows) = filter_rows(&text, asset_types)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = rows.len(), ?asset_types, "filtered ticker listing");

    if fmt == Format::Csv {
        return render_csv(&headers, &rows).map(Response::Csv);
    }

    let records = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), Value::String(v.to_string())))
                .collect::<Record>()
        })
        .collect();
    shape(ENDPOINT, records, fmt)
}

/// The listing ships as a zip holding one CSV file; a bare CSV body is accepted too.
fn unpack(body: &[u8]) -> Result<String, TiingoError> {
    if !body.starts_with(ZIP_MAGIC) {
        return String::from_utf8(body.to_vec())
            .map_err(|e| TiingoError::Data(format!("{ENDPOINT}: listing is not UTF-8: {e}")));
    }

    let mut archive = zip::ZipArchive::new(Cursor::new(body))?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.name().to_ascii_lowercase().ends_with(".csv") {
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            return Ok(text);
        }
    }
    Err(TiingoError::Data(format!(
        "{ENDPOINT}: archive holds no CSV file"
    )))
}

/// Keeps rows whose asset type is one of `asset_types`; an empty filter keeps all rows.
/// Short rows are padded with empty fields so every row carries every column.
fn filter_rows(
    text: &str,
    asset_types: &[&str],
) -> Result<(StringRecord, Vec<StringRecord>), TiingoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = rdr.headers()?.clone();

    let column = headers.iter().position(|h| h == ASSET_TYPE_COLUMN);
    if column.is_none() && !asset_types.is_empty() {
        return Err(TiingoError::Data(format!(
            "{ENDPOINT}: listing has no {ASSET_TYPE_COLUMN} column"
        )));
    }

    let mut rows = Vec::new();
    for row in rdr.records() {
        let mut row = row?;
        while row.len() < headers.len() {
            row.push_field("");
        }
        let keep = match column {
            Some(i) if !asset_types.is_empty() => row
                .get(i)
                .is_some_and(|t| asset_types.contains(&t)),
            _ => true,
        };
        if keep {
            rows.push(row);
        }
    }
    Ok((headers, rows))
}

fn render_csv(headers: &StringRecord, rows: &[StringRecord]) -> Result<String, TiingoError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| TiingoError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| TiingoError::Data(format!("{ENDPOINT}: {e}")))
}
