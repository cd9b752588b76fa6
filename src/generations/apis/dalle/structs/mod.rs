pub mod dalle_job_response;
