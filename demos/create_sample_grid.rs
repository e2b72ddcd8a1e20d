//! Creates a sample LIS-style NetCDF file for trying out ev-temp-map.
//!
//! The file holds `lat`, `lon` and an `AvgSurfT_tavg(time, lat, lon)` land
//! surface temperature whose ocean cells carry `_FillValue`.

use ndarray::{Array1, Array3};
use netcdf::create;
use std::path::Path;

const FILL_VALUE: f32 = -9999.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = Path::new("sample_grid.nc4");
    let (n_time, n_lat, n_lon) = (4, 18, 36);

    println!("🔨 Creating sample NetCDF file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(output_path)?
    }

    let mut file = create(output_path)?;

    file.add_attribute("title", "Sample land surface temperature")?;
    file.add_attribute("created_by", "create_sample_grid.rs")?;

    file.add_dimension("time", n_time)?;
    file.add_dimension("lat", n_lat)?;
    file.add_dimension("lon", n_lon)?;

    let lat_data: Vec<f32> = (0..n_lat).map(|i| -85.0 + i as f32 * 10.0).collect();
    let lon_data: Vec<f32> = (0..n_lon).map(|i| -175.0 + i as f32 * 10.0).collect();

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("long_name", "latitude")?;
        lat_var.put(Array1::from(lat_data.clone()).view(), ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("long_name", "longitude")?;
        lon_var.put(Array1::from(lon_data.clone()).view(), ..)?;
    }

    {
        let mut temp_var = file.add_variable::<f32>("AvgSurfT_tavg", &["time", "lat", "lon"])?;
        temp_var.put_attribute("units", "K")?;
        temp_var.put_attribute("long_name", "surface average temperature")?;
        temp_var.put_attribute("_FillValue", FILL_VALUE)?;

        let temperature = Array3::from_shape_fn((n_time, n_lat, n_lon), |(t, j, i)| {
            let (lat, lon) = (lat_data[j], lon_data[i]);
            // A crude continent band; everything else is ocean
            let is_land = lat.abs() < 60.0 && (lon + 90.0).rem_euclid(180.0) < 80.0;
            if !is_land {
                return FILL_VALUE;
            }
            let base_temp = 300.0 - 0.6 * lat.abs();
            let seasonal_effect = 5.0 * (t as f32 * std::f32::consts::PI / 2.0).cos();
            base_temp + seasonal_effect
        });
        temp_var.put(temperature.view(), ..)?;
    }

    println!("✅ Successfully created sample NetCDF file with:");
    println!("   📏 Dimensions: time({}), lat({}), lon({})", n_time, n_lat, n_lon);
    println!("   📈 Variables: lat, lon, AvgSurfT_tavg");
    println!("\n🧪 Try it with:");
    println!("   cargo run -- temperature -f sample_grid.nc4");
    println!("   cargo run -- mask -f sample_grid.nc4");

    Ok(())
}
