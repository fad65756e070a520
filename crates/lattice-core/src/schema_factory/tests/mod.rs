mod assemble_schema;
