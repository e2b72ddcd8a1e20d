//! NetCDF fixtures shared by the integration tests.

#![allow(dead_code)]

use ev_temp_map::errors::Result;
use ndarray::{Array1, Array2, Array3};
use netcdf::create;
use std::path::{Path, PathBuf};

pub const FILL: f32 = -9999.0;
pub const LATS: [f32; 3] = [-10.0, 0.0, 10.0];
pub const LONS: [f32; 4] = [100.0, 110.0, 120.0, 130.0];

/// First time slice of `AvgSurfT_tavg`; `FILL` marks ocean cells
pub fn first_slice() -> Array2<f32> {
    Array2::from_shape_vec(
        (3, 4),
        vec![
            FILL, 281.0, 282.0, 283.0, // lat=-10
            284.0, 285.0, FILL, 287.0, // lat=0
            288.0, 289.0, 290.0, FILL, // lat=10
        ],
    )
    .expect("fixture shape")
}

/// Writes `lat`, `lon` and a LIS style `AvgSurfT_tavg(time, lat, lon)` with two time steps.
pub fn write_lis_grid(dir: &Path) -> Result<PathBuf> {
    let file_path = dir.join("20200101.nc4");
    let mut file = create(&file_path)?;

    file.add_dimension("time", 2)?;
    file.add_dimension("lat", LATS.len())?;
    file.add_dimension("lon", LONS.len())?;

    write_coordinates(&mut file)?;

    {
        let mut var = file.add_variable::<f32>("AvgSurfT_tavg", &["time", "lat", "lon"])?;
        var.put_attribute("units", "K")?;
        var.put_attribute("_FillValue", FILL)?;

        let mut data = Array3::<f32>::zeros((2, 3, 4));
        data.index_axis_mut(ndarray::Axis(0), 0).assign(&first_slice());
        data.index_axis_mut(ndarray::Axis(0), 1).fill(300.0);
        var.put(data.view(), ..)?;
    }

    Ok(file_path)
}

/// Writes a file whose temperature is stored as scaled `i16` with a valid range.
pub fn write_packed_grid(dir: &Path) -> Result<PathBuf> {
    let file_path = dir.join("packed.nc4");
    let mut file = create(&file_path)?;

    file.add_dimension("time", 1)?;
    file.add_dimension("lat", LATS.len())?;
    file.add_dimension("lon", LONS.len())?;

    write_coordinates(&mut file)?;

    {
        let mut var = file.add_variable::<i16>("AvgSurfT_tavg", &["time", "lat", "lon"])?;
        var.put_attribute("_FillValue", -32767i16)?;
        var.put_attribute("missing_value", -1i16)?;
        var.put_attribute("valid_range", vec![0i16, 10000])?;
        var.put_attribute("scale_factor", 0.01f32)?;
        var.put_attribute("add_offset", 250.0f32)?;

        let data = Array3::from_shape_vec(
            (1, 3, 4),
            vec![
                -32767i16, 100, 200, 300, // lat=-10
                -1, 500, 600, 700, // lat=0
                800, 900, 12000, 1100, // lat=10
            ],
        )?;
        var.put(data.view(), ..)?;
    }

    Ok(file_path)
}

/// Writes a file whose temperature variable has no time dimension.
pub fn write_flat_grid(dir: &Path) -> Result<PathBuf> {
    let file_path = dir.join("flat.nc4");
    let mut file = create(&file_path)?;

    file.add_dimension("lat", LATS.len())?;
    file.add_dimension("lon", LONS.len())?;

    write_coordinates(&mut file)?;

    {
        let mut var = file.add_variable::<f32>("AvgSurfT_tavg", &["lat", "lon"])?;
        var.put(first_slice().view(), ..)?;
    }

    Ok(file_path)
}

/// Writes only the temperature variable, without coordinates.
pub fn write_grid_without_coordinates(dir: &Path) -> Result<PathBuf> {
    let file_path = dir.join("no_coords.nc4");
    let mut file = create(&file_path)?;

    file.add_dimension("time", 1)?;
    file.add_dimension("y", 3)?;
    file.add_dimension("x", 4)?;

    {
        let mut var = file.add_variable::<f32>("AvgSurfT_tavg", &["time", "y", "x"])?;
        var.put_attribute("_FillValue", FILL)?;
        let data = first_slice().insert_axis(ndarray::Axis(0));
        var.put(data.view(), ..)?;
    }

    Ok(file_path)
}

/// Rows of `AvgSurfT_tavg` and `SoilTemp_i16` written by [`write_sparse_grid`]; the rest is left unwritten
pub const WRITTEN_ROW: [f32; 4] = [280.0, 281.0, 282.0, 283.0];

/// Latitudes of [`write_sparse_grid`], the middle one being `_FillValue`
pub const COORD_FILL: f32 = -999.0;

/// Writes variables that rely on default fills and separate valid bounds:
///
/// - `lat` with `_FillValue` and one filled entry, `lon` with two unwritten entries
/// - `AvgSurfT_tavg` (`f32`) and `SoilTemp_i16` (`i16`) without `_FillValue`,
///   only their first row written
/// - `SkinTemp_bounded` (`f32`) with `valid_min`/`valid_max` and two cells outside them
pub fn write_sparse_grid(dir: &Path) -> Result<PathBuf> {
    let file_path = dir.join("sparse.nc4");
    let mut file = create(&file_path)?;

    file.add_dimension("time", 1)?;
    file.add_dimension("lat", LATS.len())?;
    file.add_dimension("lon", LONS.len())?;

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("_FillValue", COORD_FILL)?;
        lat_var.put(Array1::from(vec![LATS[0], COORD_FILL, LATS[2]]).view(), ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put(Array1::from(LONS[..2].to_vec()).view(), 0..2)?;
    }

    let row = Array3::from_shape_vec((1, 1, 4), WRITTEN_ROW.to_vec())?;

    {
        let mut var = file.add_variable::<f32>("AvgSurfT_tavg", &["time", "lat", "lon"])?;
        var.put(row.view(), (0..1, 0..1, ..))?;
    }

    {
        let mut var = file.add_variable::<i16>("SoilTemp_i16", &["time", "lat", "lon"])?;
        let row = row.mapv(|v| v as i16);
        var.put(row.view(), (0..1, 0..1, ..))?;
    }

    {
        let mut var = file.add_variable::<f32>("SkinTemp_bounded", &["time", "lat", "lon"])?;
        var.put_attribute("valid_min", 200.0f32)?;
        var.put_attribute("valid_max", 330.0f32)?;

        let mut data = first_slice();
        data[[0, 0]] = 150.0;
        data[[1, 2]] = 286.0;
        data[[2, 3]] = 400.0;
        var.put(data.insert_axis(ndarray::Axis(0)).view(), ..)?;
    }

    Ok(file_path)
}

fn write_coordinates(file: &mut netcdf::FileMut) -> Result<()> {
    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put(Array1::from(LATS.to_vec()).view(), ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put(Array1::from(LONS.to_vec()).view(), ..)?;
    }

    Ok(())
}
