//! T-SQL script generation.

use chrono::NaiveTime;
use recyclefind_core::BusinessRecord;

use crate::hours::parse_opening_hours;
use crate::materials::match_materials;

const SERVICE_NAME: &str = "Recycling Collection";

/// Quotes `value` as a T-SQL string literal, doubling embedded quotes.
#[must_use]
pub fn sql_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quote_or_null(value: Option<&str>) -> String {
    value.map_or_else(|| "NULL".to_string(), sql_quote)
}

fn time_or_null(value: Option<NaiveTime>) -> String {
    value.map_or_else(
        || "NULL".to_string(),
        |t| sql_quote(&t.format("%H:%M:%S").to_string()),
    )
}

fn number_or_null(value: Option<f64>) -> String {
    value.map_or_else(|| "NULL".to_string(), |v| v.to_string())
}

fn service_description(record: &BusinessRecord) -> String {
    if record.materials.is_empty() {
        "General recycling services".to_string()
    } else {
        format!("Recycling services for {}", record.materials.join(", "))
    }
}

fn business_block(index: usize, record: &BusinessRecord) -> Vec<String> {
    let id = format!("@BusinessID_{index}");
    let component = |kind: &str| sql_quote(record.address_component(kind).unwrap_or_default());

    let mut lines = vec![
        "    BEGIN TRY".to_string(),
        format!("        DECLARE {id} INT;"),
        "        INSERT INTO recycling.Businesses (".to_string(),
        "            Name, FormattedAddress, Latitude, Longitude, PhoneNumber,".to_string(),
        "            Website, Rating, PlaceID, ServiceKeywords".to_string(),
        "        ) VALUES (".to_string(),
        format!("            {},", sql_quote(&record.name)),
        format!("            {},", sql_quote(&record.address)),
        format!("            {},", number_or_null(record.coordinates.map(|c| c.lat))),
        format!("            {},", number_or_null(record.coordinates.map(|c| c.lng))),
        format!("            {},", quote_or_null(record.phone())),
        format!("            {},", quote_or_null(record.website())),
        format!("            {},", number_or_null(record.rating())),
        format!("            {},", quote_or_null(record.place_id.as_deref())),
        format!("            {}", sql_quote(&record.service_keywords.join(","))),
        "        );".to_string(),
        format!("        SET {id} = SCOPE_IDENTITY();"),
        "        INSERT INTO recycling.AddressComponents (".to_string(),
        "            BusinessID, StreetAddress, City, State, PostalCode, Country".to_string(),
        "        ) VALUES (".to_string(),
        format!("            {id},"),
        format!("            {},", quote_or_null(record.address_component("route"))),
        format!("            {},", component("postal_town")),
        format!("            {},", component("administrative_area_level_1")),
        format!("            {},", component("postal_code")),
        format!("            {}", component("country")),
        "        );".to_string(),
    ];

    for day in parse_opening_hours(&record.opening_hours) {
        lines.push(format!(
            "        INSERT INTO recycling.BusinessHours (BusinessID, DayOfWeek, OpenTime, CloseTime, IsClosed) VALUES ({id}, {}, {}, {}, {});",
            day.day_of_week,
            time_or_null(day.open),
            time_or_null(day.close),
            u8::from(day.closed),
        ));
    }

    for (category, description) in match_materials(&record.materials, &record.website_materials) {
        lines.push(format!(
            "        INSERT INTO recycling.BusinessMaterials (BusinessID, MaterialID, CategoryName, Description, IsVerified) SELECT {id}, MaterialID, {}, {}, 1 FROM recycling.Materials WHERE Description = {};",
            sql_quote(category),
            sql_quote(description),
            sql_quote(description),
        ));
    }

    lines.extend([
        format!(
            "        INSERT INTO recycling.BusinessServices (BusinessID, ServiceName, Description) VALUES ({id}, {}, {});",
            sql_quote(SERVICE_NAME),
            sql_quote(&service_description(record)),
        ),
        "    END TRY".to_string(),
        "    BEGIN CATCH".to_string(),
        "        INSERT INTO @ErrorLog (BusinessName, ErrorMessage)".to_string(),
        format!("        VALUES ({}, ERROR_MESSAGE());", sql_quote(&record.name)),
        "    END CATCH".to_string(),
    ]);
    lines
}

/// Builds one transaction that inserts every record.
///
/// Per-business failures are collected in `@ErrorLog` and reported at the
/// end; a failure outside those blocks rolls the whole batch back.
#[must_use]
pub fn generate_sql_statements(records: &[BusinessRecord]) -> String {
    let mut lines: Vec<String> = [
        "SET NOCOUNT ON;",
        "SET XACT_ABORT ON;",
        "DECLARE @ErrorLog TABLE (BusinessName NVARCHAR(255), ErrorMessage NVARCHAR(MAX));",
        "BEGIN TRY",
        "    BEGIN TRANSACTION;",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    for (index, record) in records.iter().enumerate() {
        lines.extend(business_block(index, record));
    }

    lines.extend(
        [
            "    COMMIT TRANSACTION;",
            "    SELECT * FROM @ErrorLog WHERE ErrorMessage IS NOT NULL;",
            "END TRY",
            "BEGIN CATCH",
            "    IF @@TRANCOUNT > 0",
            "        ROLLBACK TRANSACTION;",
            "    SELECT * FROM @ErrorLog WHERE ErrorMessage IS NOT NULL;",
            "    THROW;",
            "END CATCH",
        ]
        .iter()
        .map(ToString::to_string),
    );

    let mut script = lines.join("\n");
    script.push('\n');
    script
}
