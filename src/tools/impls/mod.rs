mod availability_graph;
mod create_employee;
mod create_schedule;
mod current_weather;
mod generate_schedule;
mod remove_employee;
mod update_employee;
mod view_employees;
mod weather_forecast;

pub use availability_graph::AvailabilityGraphTool;
pub use create_employee::CreateEmployeeTool;
pub use create_schedule::CreateScheduleTool;
pub use current_weather::CurrentWeatherTool;
pub use generate_schedule::GenerateScheduleTool;
pub use remove_employee::RemoveEmployeeTool;
pub use update_employee::UpdateEmployeeTool;
pub use view_employees::ViewEmployeesTool;
pub use weather_forecast::WeatherForecastTool;
