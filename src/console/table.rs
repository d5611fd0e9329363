use crate::http_handler::http_response::unit_type_list::UnitType;
use crate::http_handler::http_response::vessel_list::VesselOption;
use crate::http_handler::http_response::voyage_list::Voyage;
use itertools::Itertools;

/// Date format used in every rendered table.
pub(crate) const TABLE_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub(crate) fn render_voyage_table(voyages: &[Voyage]) -> String {
    let rows = voyages
        .iter()
        .map(|voyage| {
            [
                String::from(voyage.id()),
                voyage.scheduled_departure().format(TABLE_DATE_FORMAT).to_string(),
                voyage.scheduled_arrival().format(TABLE_DATE_FORMAT).to_string(),
                String::from(voyage.port_of_loading()),
                String::from(voyage.port_of_discharge()),
                String::from(voyage.vessel().name()),
                voyage.unit_types().iter().map(UnitType::name).join(", "),
            ]
        })
        .collect::<Vec<_>>();
    render(
        ["ID", "DEPARTURE", "ARRIVAL", "LOADING", "DISCHARGE", "VESSEL", "UNIT TYPES"],
        &rows,
    )
}

pub(crate) fn render_vessel_table(vessels: &[VesselOption]) -> String {
    let rows = vessels
        .iter()
        .map(|vessel| [String::from(vessel.value()), String::from(vessel.label())])
        .collect::<Vec<_>>();
    render(["ID", "NAME"], &rows)
}

pub(crate) fn render_unit_type_table(unit_types: &[UnitType]) -> String {
    let rows = unit_types
        .iter()
        .map(|unit_type| {
            [
                String::from(unit_type.id()),
                String::from(unit_type.name()),
                format!("{}m", unit_type.default_length()),
            ]
        })
        .collect::<Vec<_>>();
    render(["ID", "NAME", "DEFAULT LENGTH"], &rows)
}

/// Pads every column to the widest cell it holds, two spaces between
/// columns, no trailing padding on the last one.
fn render<const N: usize>(header: [&'static str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    let header = header.map(String::from);
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .join("  ")
                .trim_end()
                .to_string()
        })
        .join("\n")
}
