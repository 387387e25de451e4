/// Overpass QL to download a river, and all rivers which flow into it, as JSON.
///
/// Run it on <https://overpass-turbo.eu/> (which fills in `{{bbox}}`) and export as GeoJSON to
/// get an input file.
pub fn overpass_query(river_name: &str, timeout_s: u32) -> String {
    let name = river_name.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"[out:json][timeout:{timeout_s}];
(
    relation[waterway=river][name="{name}"]({{{{bbox}}}}) -> .river;
    relation[waterway=river][destination="{name}"]({{{{bbox}}}}) -> .inflows;
);
out body;
>;
out skel qt;
"#
    )
}
