use crate::globe::classify::Boundary;
use crate::hash::{hash2, rand_simple};
use anyhow::Result;
use geojson::{GeoJson, Geometry, Value};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Built-in continent outlines: name plus a closed ring of
/// (latitude, longitude) vertices in degrees. Coarse on purpose — the 1°
/// classifier grid is the limiting resolution anyway. Higher-detail data
/// can be dropped into `data/` as GeoJSON and takes precedence.
const CONTINENTS: &[(&str, &[(f64, f64)])] = &[
    (
        "North America",
        &[
            (69.5, -90.5), (67.1, -81.4), (58.9, -94.7), (51.2, -79.9),
            (62.6, -77.4), (58.2, -67.6), (60.3, -64.6), (53.3, -55.8),
            (46.8, -71.1), (49.2, -65.1), (45.9, -59.8), (39.2, -76.3),
            (31.4, -81.3), (25.2, -80.4), (30.1, -84.1), (27.8, -97.1),
            (18.8, -95.9), (21.5, -87.1), (15.9, -88.9), (15.3, -83.4),
            (9.0, -82.2), (11.1, -74.9), (7.2, -80.9), (19.3, -105.0),
            (31.2, -113.1), (23.4, -109.4), (24.7, -112.2), (40.3, -124.4),
            (49.0, -122.8), (58.1, -134.1), (61.3, -150.6), (54.4, -164.8),
            (58.9, -157.0), (61.5, -166.1), (64.8, -160.8), (65.7, -168.1),
            (71.4, -156.6), (67.4, -108.9), (67.3, -96.1), (71.9, -95.2),
        ],
    ),
    (
        "South America",
        &[
            (11.1, -74.9), (10.7, -61.9), (4.2, -51.3), (-0.1, -50.4),
            (-7.3, -34.7), (-21.9, -40.9), (-24.9, -47.6), (-34.4, -53.8),
            (-33.9, -58.4), (-36.9, -56.8), (-41.1, -65.1), (-48.1, -66.0),
            (-53.8, -71.0), (-52.3, -74.9), (-46.6, -75.6), (-42.4, -72.7),
            (-18.3, -70.4), (-14.6, -76.0), (-4.7, -81.4), (3.8, -77.1),
            (9.0, -79.1),
        ],
    ),
    (
        "Europe",
        &[
            (31.2, 29.7), (31.2, 34.3), (36.7, 36.2), (36.7, 27.6),
            (39.5, 26.2), (41.5, 41.6), (45.2, 36.7), (47.3, 39.1),
            (44.4, 33.9), (46.6, 30.7), (41.1, 28.8), (40.3, 22.6),
            (36.4, 23.2), (45.6, 13.9), (40.2, 18.5), (37.9, 15.7),
            (44.4, 8.9), (36.0, -5.9), (36.9, -8.9), (43.0, -9.4),
            (43.4, -1.9), (48.7, -4.6), (53.5, 8.1), (57.1, 8.5),
            (54.0, 10.9), (54.4, 19.7), (59.2, 23.3), (60.0, 29.1),
            (60.7, 21.3), (65.1, 25.4), (65.7, 22.2), (55.4, 12.9),
            (59.5, 10.4), (58.6, 5.7), (62.6, 5.9), (69.8, 19.2),
            (70.5, 31.3), (69.3, 33.8),
        ],
    ),
    (
        "Africa",
        &[
            (29.9, 32.4), (11.7, 42.7), (10.6, 51.0), (-4.7, 39.2),
            (-14.7, 40.8), (-19.8, 34.8), (-24.1, 35.5), (-32.8, 28.2),
            (-34.8, 19.6), (-18.1, 11.8), (-10.7, 13.7), (3.7, 9.4),
            (6.3, 4.3), (4.4, -8.0), (14.7, -17.6), (29.9, -9.8),
            (35.8, -5.9), (33.1, 11.1), (32.9, 21.8),
        ],
    ),
    (
        "Asia",
        &[
            (77.0, 107.0), (70.8, 131.3), (69.4, 178.6), (62.3, 179.2),
            (59.9, 163.5), (51.0, 156.8), (56.8, 155.9), (62.6, 164.5),
            (54.7, 135.1), (52.2, 141.4), (39.8, 127.5), (35.1, 129.1),
            (40.9, 121.6), (39.2, 118.0), (37.5, 122.4), (34.9, 119.2),
            (28.2, 121.7), (19.8, 105.9), (13.4, 109.3), (8.6, 105.2),
            (13.4, 100.1), (1.3, 104.2), (22.8, 91.4), (15.9, 80.3),
            (8.0, 77.5), (21.4, 72.6), (30.3, 48.9), (24.0, 51.8),
            (26.4, 56.4), (22.3, 59.8), (12.6, 43.5), (21.3, 39.1),
            (69.3, 33.8), (67.5, 41.1), (66.6, 33.2), (63.8, 37.0),
            (68.6, 43.5), (68.1, 68.5), (71.0, 66.7), (73.0, 69.9),
            (66.2, 72.4), (72.8, 74.7),
        ],
    ),
    (
        "Australia",
        &[
            (-13.8, 143.6), (-26.1, 153.1), (-37.4, 150.0), (-38.0, 140.6),
            (-34.4, 138.2), (-35.3, 136.8), (-32.9, 137.8), (-34.9, 136.0),
            (-31.5, 131.3), (-34.2, 115.0), (-21.8, 114.1), (-19.7, 120.9),
            (-14.2, 125.7), (-15.0, 129.6), (-11.1, 132.4), (-11.9, 136.5),
            (-15.0, 135.5), (-17.7, 140.2), (-11.0, 142.1),
        ],
    ),
    (
        "Greenland",
        &[
            (83.5, -27.1), (82.7, -20.8), (82.0, -31.4), (81.3, -12.2),
            (80.2, -20.0), (80.1, -17.7), (76.6, -21.7), (74.3, -19.4),
            (70.2, -26.4), (70.1, -22.3), (65.5, -39.8), (60.1, -43.4),
            (63.6, -51.6), (67.2, -54.0), (69.9, -50.9), (69.6, -54.7),
            (70.6, -51.4), (75.5, -58.6), (78.0, -73.3), (81.8, -62.7),
        ],
    ),
    (
        "Japan",
        &[
            (37.1, 141.0), (33.5, 135.8), (33.9, 131.0), (31.4, 130.2),
            (33.3, 129.4), (38.2, 139.4), (41.2, 140.3),
        ],
    ),
    (
        "British Isles",
        &[
            (58.6, -3.0), (51.3, 1.4), (50.0, -5.2), (54.0, -2.9),
            (56.8, -6.1),
        ],
    ),
    (
        "Antarctica",
        &[
            (-64.2, -58.6), (-68.0, -65.7), (-73.7, -60.8), (-79.2, -78.0),
            (-83.2, -58.2), (-80.3, -28.5), (-78.1, -35.3), (-70.9, -6.9),
            (-65.8, 54.5), (-72.3, 69.9), (-66.2, 88.0), (-65.3, 135.1),
            (-71.7, 171.2), (-80.9, 159.8), (-84.7, 180.0), (-89.9, 180.0),
            (-89.9, -180.0), (-84.1, -179.1), (-85.0, -143.1), (-76.9, -158.4),
            (-73.9, -74.9),
        ],
    ),
];

/// Major cities for night lights: name, latitude, longitude.
pub static CITY_LIGHTS: &[(&str, f64, f64)] = &[
    ("New York", 40.7, -74.0),
    ("Los Angeles", 34.0, -118.2),
    ("Chicago", 41.9, -87.6),
    ("Houston", 29.8, -95.4),
    ("Phoenix", 33.4, -112.1),
    ("Denver", 39.7, -105.0),
    ("San Francisco", 37.8, -122.4),
    ("Seattle", 47.6, -122.3),
    ("Miami", 25.8, -80.2),
    ("London", 51.5, -0.1),
    ("Paris", 48.9, 2.4),
    ("Berlin", 52.5, 13.4),
    ("Rome", 41.9, 12.5),
    ("Madrid", 40.4, -3.7),
    ("Moscow", 55.8, 37.6),
    ("St Petersburg", 59.9, 30.3),
    ("Tehran", 35.7, 51.4),
    ("Cairo", 30.0, 31.2),
    ("Cape Town", -33.9, 18.4),
    ("Johannesburg", -26.2, 28.0),
    ("Mexico City", 19.4, -99.1),
    ("Sao Paulo", -23.5, -46.6),
    ("Buenos Aires", -34.6, -58.4),
    ("Rio de Janeiro", -22.9, -43.2),
    ("Delhi", 28.6, 77.2),
    ("Mumbai", 19.1, 72.9),
    ("Chennai", 13.1, 80.3),
    ("Kolkata", 22.6, 88.4),
    ("Shanghai", 31.2, 121.5),
    ("Beijing", 39.9, 116.4),
    ("Guangzhou", 23.1, 113.3),
    ("Hong Kong", 22.3, 114.2),
    ("Tokyo", 35.7, 139.7),
    ("Osaka", 34.7, 135.5),
    ("Seoul", 37.6, 126.9),
    ("Sydney", -33.9, 151.2),
    ("Melbourne", -37.8, 144.9),
    ("Brisbane", -27.5, 153.0),
    ("Singapore", 1.4, 103.8),
    ("Bangkok", 13.8, 100.5),
    ("Jakarta", -6.2, 106.8),
    ("Manila", 14.6, 121.0),
];

const CLOUD_SEED: u64 = 42;
const CLOUD_CANDIDATES: u64 = 300;
const CLOUD_COVERAGE: f64 = 0.3;

/// Simulated cloud layer: a deterministic sparse point set between 60°S
/// and 70°N (roughly 30% of candidates survive the coverage roll).
static CLOUD_POINTS: LazyLock<Vec<(f64, f64)>> = LazyLock::new(|| {
    let mut points = Vec::new();
    for i in 0..CLOUD_CANDIDATES {
        let seed = hash2(CLOUD_SEED, i);
        if rand_simple(seed) < CLOUD_COVERAGE {
            let lat = -60.0 + rand_simple(seed.wrapping_add(1)) * 130.0;
            let lon = -180.0 + rand_simple(seed.wrapping_add(2)) * 360.0;
            points.push((lat, lon));
        }
    }
    points
});

pub fn cloud_points() -> &'static [(f64, f64)] {
    &CLOUD_POINTS
}

/// The built-in boundary set.
pub fn builtin_boundaries() -> Vec<Boundary> {
    CONTINENTS
        .iter()
        .map(|(name, points)| Boundary::new(*name, points.to_vec()))
        .collect()
}

/// Load higher-resolution boundaries from every GeoJSON file in `dir`.
/// Files that fail to parse are skipped with a warning; an empty result
/// means the caller should fall back to the built-in set.
pub fn load_geojson_boundaries(dir: &Path) -> Result<Vec<Boundary>> {
    let mut boundaries = Vec::new();

    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            matches!(
                p.extension().and_then(|e| e.to_str()),
                Some("json") | Some("geojson")
            )
        })
        .collect();
    entries.sort();

    for path in entries {
        if let Err(e) = load_file(&path, &mut boundaries) {
            eprintln!("Warning: failed to load {}: {}", path.display(), e);
        }
    }

    Ok(boundaries)
}

fn load_file(path: &Path, boundaries: &mut Vec<Boundary>) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let geojson: GeoJson = content.parse()?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("region")
        .to_string();

    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in fc.features {
                let name = feature
                    .properties
                    .as_ref()
                    .and_then(|p| p.get("name").or_else(|| p.get("admin")))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&stem)
                    .to_string();
                if let Some(geometry) = feature.geometry {
                    collect_polygons(&geometry, &name, boundaries);
                }
            }
        }
        GeoJson::Feature(f) => {
            if let Some(geometry) = f.geometry {
                collect_polygons(&geometry, &stem, boundaries);
            }
        }
        GeoJson::Geometry(geometry) => {
            collect_polygons(&geometry, &stem, boundaries);
        }
    }

    Ok(())
}

/// Extract exterior polygon rings as boundaries. GeoJSON stores
/// (lon, lat); the Boundary contract is (lat, lon).
fn collect_polygons(geometry: &Geometry, name: &str, boundaries: &mut Vec<Boundary>) {
    match &geometry.value {
        Value::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                boundaries.push(ring_to_boundary(name, exterior));
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if let Some(exterior) = rings.first() {
                    boundaries.push(ring_to_boundary(name, exterior));
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                collect_polygons(g, name, boundaries);
            }
        }
        _ => {}
    }
}

fn ring_to_boundary(name: &str, ring: &[Vec<f64>]) -> Boundary {
    let points = ring
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| (c[1], c[0]))
        .collect();
    Boundary::new(name, points)
}
